//! # Tourdesk - Sign-in TUI
//!
//! The terminal sign-in screen for the Tourdesk travel service, built with
//! Ratatui. Two small behaviors carry the user experience: an
//! application-wide dark mode whose preference survives restarts, and a
//! password field that can be revealed and re-masked with a synced eye
//! indicator.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (preference writes, logging)
//! - **View** (`presentation`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use tourdesk::core::{msg::{Msg, ThemeMsg}, state::AppState, update::update};
//!
//! // Initialize state; the theme defaults to light.
//! let state = AppState::default();
//!
//! // Toggling flips the theme and emits a command persisting "true".
//! let (state, commands) = update(Msg::Theme(ThemeMsg::Toggle), state);
//!
//! assert!(state.theme.mode.is_dark());
//! assert_eq!(commands.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Elm-style state, messages, update, commands
//! - [`domain`] - form specs and the preference store interface
//! - [`infrastructure`] - terminal, config files, CLI, persistence
//! - [`integration`] - key translation and the runtime loop
//! - [`presentation`] - components and widgets
//! - [`utils`] - logging, panic handling, paths

#![deny(warnings)]
#![allow(dead_code)]

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::cmd::Cmd;
pub use crate::core::msg::Msg;
pub use crate::core::state::AppState;
pub use crate::core::update::update;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
