//! Remove command implementation.
//!
//! The `dal remove <alias>` command deletes an alias from the store and its
//! line from the shell startup file, after asking for confirmation.

use crate::cli::args::RemoveArgs;
use crate::config::Environment;
use crate::error::Result;
use crate::manager::{AliasManager, RemoveOutcome};
use crate::ui::{hints, Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Prompt key for the removal confirmation.
pub const CONFIRM_REMOVE_KEY: &str = "confirm_remove";

/// The remove command implementation.
pub struct RemoveCommand {
    env: Environment,
    args: RemoveArgs,
}

impl RemoveCommand {
    /// Create a new remove command.
    pub fn new(env: &Environment, args: RemoveArgs) -> Self {
        Self {
            env: env.clone(),
            args,
        }
    }
}

impl Command for RemoveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manager = AliasManager::new(&self.env);
        let alias = &self.args.alias;

        if !alias.is_empty() && manager.store().find(alias)?.is_none() {
            ui.warning(&format!("Alias {} not found, nothing to remove.", alias));
            ui.show_hint(hints::after_not_found());
            return Ok(CommandResult::success());
        }

        if !self.args.yes {
            let prompt = Prompt::confirm(
                CONFIRM_REMOVE_KEY,
                format!("Do you want to remove the alias {}?", alias),
                true,
            );
            if !ui.confirm(&prompt)? {
                ui.message(&format!("Kept alias {}.", alias));
                return Ok(CommandResult::success());
            }
        }

        ui.message(&format!("Removing alias {}...", alias));
        match manager.remove(alias)? {
            RemoveOutcome::Removed { profile_file } => {
                ui.success(&format!(
                    "Alias {} removed from {}",
                    alias,
                    profile_file.display()
                ));
                ui.show_hint(&hints::reload_shell(&profile_file, self.env.home()));
            }
            RemoveOutcome::NotFound => {
                ui.warning(&format!("Alias {} not found, nothing to remove.", alias));
            }
        }

        Ok(CommandResult::success())
    }
}
