use serde::{Deserialize, Serialize};

/// Messages for [`crate::core::state::theme::ThemeState`] transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMsg {
    /// Startup only: carries the raw stored preference value, or `None`
    /// when nothing was ever persisted.
    ApplyStored(Option<String>),
    /// User-initiated theme flip.
    Toggle,
}
