use serde::{Deserialize, Serialize};

/// Messages for [`crate::core::state::form::FormState`] transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMsg {
    /// Flip the password between masked and plain display.
    ToggleVisibility,
    FocusNext,
    FocusPrev,
    /// A printable key edits the focused field.
    Input(char),
    Backspace,
    Submit,
}
