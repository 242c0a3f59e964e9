pub mod form;
pub mod system;
pub mod theme;

use serde::{Deserialize, Serialize};

pub use form::FormMsg;
pub use system::SystemMsg;
pub use theme::ThemeMsg;

/// Top-level message type dispatched through [`crate::core::update::update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    Theme(ThemeMsg),
    Form(FormMsg),
    System(SystemMsg),
}
