//! Infrastructure layer
//!
//! Everything that touches the outside world: terminal, config files,
//! command line, preference persistence.

pub mod cli;
pub mod config;
pub mod preferences;
pub mod test_terminal;
pub mod tui;
