use serde::{Deserialize, Serialize};

use crate::core::cmd::Cmd;
use crate::core::msg::theme::ThemeMsg;
use crate::domain::preferences::DARK_MODE_KEY;

/// The two visual themes. `Light` is the default for fresh installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Dark mode state machine: {Light, Dark}, flipped by [`ThemeMsg::Toggle`],
/// seeded once at startup from the stored preference.
#[derive(Debug, Clone, Default)]
pub struct ThemeState {
    pub mode: ThemeMode,
}

impl ThemeState {
    pub fn update(&mut self, msg: ThemeMsg) -> Vec<Cmd> {
        match msg {
            // Only the exact string "true" enables dark mode. Absent or
            // malformed values keep the light default and raise no error.
            ThemeMsg::ApplyStored(raw) => {
                if raw.as_deref() == Some("true") {
                    self.mode = ThemeMode::Dark;
                }
                vec![]
            }
            // Flip first, then persist the string form of the resulting
            // state, so the store always mirrors what is on screen.
            ThemeMsg::Toggle => {
                self.mode = self.mode.flipped();
                vec![Cmd::SavePreference {
                    key: DARK_MODE_KEY.to_string(),
                    value: self.mode.is_dark().to_string(),
                }]
            }
        }
    }
}
