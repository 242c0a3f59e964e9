pub mod keybindings;
pub mod styles;

use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::utils;

pub use keybindings::{KeyAction, KeyBindings};
pub use styles::Styles;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
}

impl Config {
    /// Loads the embedded defaults, then merges any user config file found
    /// in the config directory on top. A missing user config is fine; the
    /// defaults alone are a working setup.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true;
            }
        }
        if !found_config {
            log::info!("No user configuration file found, using defaults");
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings and styles under user overrides.
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| *action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_embedded_defaults_parse() {
        let cfg: Config = json5::from_str(CONFIG).expect("embedded config must parse");

        let toggle_dark = cfg
            .keybindings
            .get(&vec![KeyEvent::new(
                KeyCode::Char('d'),
                KeyModifiers::CONTROL,
            )])
            .copied();
        assert_eq!(toggle_dark, Some(KeyAction::ToggleDarkMode));

        let reveal = cfg
            .keybindings
            .get(&vec![KeyEvent::new(
                KeyCode::Char('r'),
                KeyModifiers::CONTROL,
            )])
            .copied();
        assert_eq!(reveal, Some(KeyAction::ToggleRevealPassword));

        assert!(cfg.styles.get("status_bar").is_some());
    }

    #[test]
    fn test_config_new_falls_back_to_defaults() {
        // With or without a user config file present, loading must succeed
        // and carry the default bindings.
        let cfg = Config::new().expect("config must load without a user file");
        assert!(!cfg.keybindings.is_empty());
    }
}
