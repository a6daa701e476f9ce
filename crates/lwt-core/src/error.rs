// src/error.rs
use thiserror::Error;

/// Errors surfaced while resolving configuration and starting the shell.
///
/// None of these reach the user as a crash except `ProcessSpawnFailed`;
/// the rest are logged and replaced by defaults.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TerminalError {
    #[error("Invalid configuration: {field} = {value}")]
    ConfigurationError { field: String, value: String },

    #[error("Could not load complete theme ({missing} missing or invalid entries)")]
    IncompleteTheme { missing: usize },

    #[error("Failed to spawn shell process {program}: {message}")]
    ProcessSpawnFailed { program: String, message: String },

    #[error("Unable to enable transparency; no compositing manager running")]
    CompositingUnavailable,
}

pub type TerminalResult<T> = Result<T, TerminalError>;
