//! Alias execution.
//!
//! `dal <alias> [extra args...]` runs the stored command line through the
//! system shell with the terminal attached.

use crate::config::Environment;
use crate::error::{DoualError, Result};
use crate::manager::AliasManager;
use crate::ui::{hints, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The exec command implementation.
pub struct ExecCommand {
    env: Environment,
    alias: String,
    extra_args: Vec<String>,
    dry_run: bool,
}

impl ExecCommand {
    /// Create a new exec command.
    pub fn new(env: &Environment, alias: &str, extra_args: Vec<String>, dry_run: bool) -> Self {
        Self {
            env: env.clone(),
            alias: alias.to_string(),
            extra_args,
            dry_run,
        }
    }

    /// Build from the raw words of an external subcommand: the alias
    /// followed by its extra arguments.
    pub fn from_words(env: &Environment, words: &[String], dry_run: bool) -> Self {
        let (alias, extra) = match words.split_first() {
            Some((alias, extra)) => (alias.as_str(), extra.to_vec()),
            None => ("", Vec::new()),
        };
        Self::new(env, alias, extra, dry_run)
    }

    /// The alias being run.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Arguments appended after the stored ones.
    pub fn extra_args(&self) -> &[String] {
        &self.extra_args
    }
}

impl Command for ExecCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manager = AliasManager::new(&self.env);

        let line = match manager.resolve(&self.alias, &self.extra_args) {
            Ok(line) => line,
            Err(e @ DoualError::AliasNotFound { .. }) => {
                ui.error(&e.to_string());
                ui.show_hint(hints::after_not_found());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if self.dry_run {
            ui.print(&line);
            return Ok(CommandResult::success());
        }

        if ui.output_mode().shows_details() {
            ui.message(&format!("Running `{}`", line));
        }

        match manager.execute(&self.alias, &self.extra_args) {
            Ok(result) => {
                if ui.output_mode().shows_details() {
                    ui.message(&format!("Finished in {:.2?}", result.duration));
                }
                Ok(CommandResult::success())
            }
            Err(e @ DoualError::CommandFailed { code, .. }) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(code.filter(|c| *c != 0).unwrap_or(1)))
            }
            Err(e) => Err(e),
        }
    }
}
