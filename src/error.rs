//! Error types for doual operations.
//!
//! This module defines [`DoualError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Store and profile failures carry the path they were working on
//! - `AliasNotFound` and `CommandFailed` are reported by the commands and
//!   turned into an exit code rather than surfacing as a fatal error
//! - Use `anyhow::Error` (via `DoualError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for doual operations.
#[derive(Debug, Error)]
pub enum DoualError {
    /// The alias store exists but does not hold a valid alias list.
    #[error("Alias store at {path} is corrupt: {message}")]
    CorruptStore { path: PathBuf, message: String },

    /// The shell startup file could not be read or written.
    #[error("Failed to update shell startup file {path}: {message}")]
    ProfileSync { path: PathBuf, message: String },

    /// No alias with this name is stored.
    #[error("Alias '{alias}' not found")]
    AliasNotFound { alias: String },

    /// The aliased command could not be spawned or exited non-zero.
    #[error("Command `{command}` failed{}", failure_detail(.code, .message))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        message: Option<String>,
    },

    /// Alias name cannot be used as a shell alias or CLI word.
    #[error("Invalid alias name '{alias}': {reason}")]
    InvalidAlias { alias: String, reason: String },

    /// The command to alias is empty.
    #[error("Command to alias must not be empty")]
    EmptyCommand,

    /// No home directory could be determined from the environment.
    #[error("HOME environment variable not found")]
    HomeNotFound,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn failure_detail(code: &Option<i32>, message: &Option<String>) -> String {
    match (code, message) {
        (_, Some(message)) => format!(": {}", message),
        (Some(code), None) => format!(" with exit code {}", code),
        (None, None) => String::new(),
    }
}

/// Result type alias for doual operations.
pub type Result<T> = std::result::Result<T, DoualError>;
