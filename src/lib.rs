//! doual - named shortcuts for shell commands.
//!
//! `dal` keeps a JSON list of aliases in the user's home directory, mirrors
//! each one into the current shell's startup file as an `alias` line, and
//! can run any stored alias directly.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Home directory and shell discovery
//! - [`error`] - Error types and result aliases
//! - [`manager`] - Alias operations over the store and startup file
//! - [`shell`] - Shell detection, startup file sync, and command execution
//! - [`store`] - Alias records and their on-disk store
//! - [`ui`] - Prompts, hints, tables, and terminal output
//!
//! # Example
//!
//! ```
//! use doual::store::{AliasOptions, AliasRecord};
//!
//! let record = AliasRecord::new("apt-get", "up", AliasOptions::new(Some("update".into()), true));
//! assert_eq!(record.command_line(), "sudo apt-get update");
//! ```
//!
//! For file-backed usage, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod manager;
pub mod shell;
pub mod store;
pub mod ui;

pub use error::{DoualError, Result};
