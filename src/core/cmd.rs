use serde::{Deserialize, Serialize};

/// Elm-like command definitions
/// Represents side effects the runtime executes after an update: preference
/// writes and log lines. Rendering is orchestrated by the runner itself and
/// never flows through `Cmd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Write-through of a preference value, e.g. the dark mode flag.
    SavePreference { key: String, value: String },
    LogInfo { message: String },
}
