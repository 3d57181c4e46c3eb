//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::Environment;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// Conditions the user should simply be told about (unknown alias,
    /// failing aliased command) come back as a failed [`CommandResult`];
    /// `Err` is reserved for failures `main` reports as errors.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// The code to exit the process with.
    ///
    /// Failure codes outside `1..=255` (negative Windows status codes, or
    /// a zero that would read as success) become 1.
    pub fn process_exit_code(&self) -> u8 {
        if self.success {
            return 0;
        }
        u8::try_from(self.exit_code)
            .ok()
            .filter(|code| *code != 0)
            .unwrap_or(1)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    env: Environment,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given environment.
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// Get the environment commands run in.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Create(args) => {
                let cmd = super::create::CreateCommand::new(&self.env, args.clone());
                cmd.execute(ui)
            }
            Commands::Remove(args) => {
                let cmd = super::remove::RemoveCommand::new(&self.env, args.clone());
                cmd.execute(ui)
            }
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(&self.env, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            Commands::Exec(words) => {
                let cmd = super::exec::ExecCommand::from_words(&self.env, words, cli.dry_run);
                cmd.execute(ui)
            }
        }
    }
}
