//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Any word that is not a built-in
//! subcommand is treated as an alias and handed to [`exec`].

pub mod completions;
pub mod create;
pub mod dispatcher;
pub mod exec;
pub mod list;
pub mod remove;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
