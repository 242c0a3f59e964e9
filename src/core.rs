//! Elm-style application core
//!
//! - **Model** (`state`): application state
//! - **Message** (`msg`): events that change the state
//! - **Update** (`update`): pure state transitions
//! - **Command** (`cmd`): side effects executed by the runtime

pub mod cmd;
pub mod msg;
pub mod state;
pub mod update;
