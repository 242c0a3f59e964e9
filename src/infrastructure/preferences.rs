//! File-backed preference store.
//!
//! Persists a flat string-to-string map as JSON in the per-user data
//! directory, one value per key.

use std::collections::HashMap;
use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};

use crate::domain::preferences::PreferenceStore;
use crate::utils::get_data_dir;

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug)]
pub struct FsPreferenceStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FsPreferenceStore {
    /// Opens the store at the default location, creating the data
    /// directory if needed. A missing file means an empty store.
    pub fn open_default() -> Result<Self> {
        let directory = get_data_dir();
        std::fs::create_dir_all(&directory)
            .wrap_err_with(|| format!("failed to create {}", directory.display()))?;
        Self::open(directory.join(PREFERENCES_FILE))
    }

    pub fn open(path: PathBuf) -> Result<Self> {
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)
                .wrap_err_with(|| format!("malformed preference file {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(e).wrap_err_with(|| format!("failed to read {}", path.display()))
            }
        };
        Ok(Self { path, entries })
    }
}

impl PreferenceStore for FsPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        let raw = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, raw)
            .wrap_err_with(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::domain::preferences::DARK_MODE_KEY;

    use super::*;

    #[test]
    fn test_missing_file_is_empty_store() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = FsPreferenceStore::open(dir.path().join(PREFERENCES_FILE))?;
        assert_eq!(store.get(DARK_MODE_KEY)?, None);

        Ok(())
    }

    #[test]
    fn test_values_survive_reopen() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(PREFERENCES_FILE);

        let mut store = FsPreferenceStore::open(path.clone())?;
        store.set(DARK_MODE_KEY, "true")?;
        drop(store);

        let store = FsPreferenceStore::open(path)?;
        assert_eq!(store.get(DARK_MODE_KEY)?, Some("true".to_string()));

        Ok(())
    }

    #[test]
    fn test_malformed_file_is_an_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(&path, "not json")?;

        assert!(FsPreferenceStore::open(path).is_err());

        Ok(())
    }
}
