pub mod form;
pub mod system;
pub mod theme;

use crate::infrastructure::config::Config;

pub use form::FormState;
pub use system::SystemState;
pub use theme::ThemeState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub theme: ThemeState,
    pub form: FormState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Self::default()
        }
    }
}
