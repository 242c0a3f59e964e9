//! Key-value preference persistence.
//!
//! Persistence is a trait so the runtime can use a file-backed store while
//! tests substitute an in-memory one.

use std::collections::HashMap;

use color_eyre::eyre::Result;

/// Store key for the dark mode flag. The value is the string form of a
/// boolean (`"true"` / `"false"`), never a parsed type.
pub const DARK_MODE_KEY: &str = "dark-mode";

/// Per-user key-value store surviving restarts.
pub trait PreferenceStore: Send {
    /// Returns the stored value for `key`, or `None` when nothing was ever
    /// written. Absence is not an error.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store backing tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    entries: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded store, for simulating a previous session.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_absent_key_is_none() -> Result<()> {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.get(DARK_MODE_KEY)?, None);

        Ok(())
    }

    #[test]
    fn test_set_replaces_value() -> Result<()> {
        let mut store = MemoryPreferenceStore::new();
        store.set(DARK_MODE_KEY, "true")?;
        store.set(DARK_MODE_KEY, "false")?;
        assert_eq!(store.get(DARK_MODE_KEY)?, Some("false".to_string()));

        Ok(())
    }

    #[test]
    fn test_with_entries() -> Result<()> {
        let store = MemoryPreferenceStore::with_entries([(DARK_MODE_KEY, "true")]);
        assert_eq!(store.get(DARK_MODE_KEY)?, Some("true".to_string()));

        Ok(())
    }
}
