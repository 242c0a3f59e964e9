use serde::{Deserialize, Serialize};

/// Messages for [`crate::core::state::system::SystemState`] transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    Suspend,
    Resume,
    StatusMessage(String),
    ClearStatusMessage,
}
