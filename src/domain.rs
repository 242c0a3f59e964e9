//! Domain types shared across the application
//!
//! This module contains pure types with no I/O:
//! - Form screen descriptions
//! - Preference persistence interface

pub mod form_spec;
pub mod preferences;

pub use form_spec::{FieldKind, FieldSpec, FormSpec, RevealToggleSpec};
pub use preferences::{MemoryPreferenceStore, PreferenceStore, DARK_MODE_KEY};
