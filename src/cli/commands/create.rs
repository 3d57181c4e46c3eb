//! Create command implementation.
//!
//! The `dal create <command> <alias>` command stores an alias and mirrors
//! it into the shell startup file, replacing any alias with the same name.

use crate::cli::args::CreateArgs;
use crate::config::Environment;
use crate::error::{DoualError, Result};
use crate::manager::AliasManager;
use crate::store::AliasOptions;
use crate::ui::{hints, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The create command implementation.
pub struct CreateCommand {
    env: Environment,
    args: CreateArgs,
}

impl CreateCommand {
    /// Create a new create command.
    pub fn new(env: &Environment, args: CreateArgs) -> Self {
        Self {
            env: env.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CreateArgs {
        &self.args
    }
}

impl Command for CreateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manager = AliasManager::new(&self.env);
        let alias = &self.args.alias;
        let options = AliasOptions::new(self.args.initial_args.clone(), self.args.run_as_root);

        ui.message(&format!("Creating or updating alias {}...", alias));
        if ui.output_mode().shows_details() {
            ui.message(&hints::shell_target(self.env.shell_type()));
        }

        let outcome = match manager.create(&self.args.command, alias, options) {
            Ok(outcome) => outcome,
            Err(e @ DoualError::ProfileSync { .. }) => {
                ui.warning(&format!(
                    "Alias {} was saved, but the shell startup file was not updated.",
                    alias
                ));
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        ui.success(&format!(
            "Alias {} added to {}",
            alias,
            outcome.profile_file.display()
        ));
        let verb = if outcome.replaced { "updated" } else { "created" };
        ui.success(&format!("Alias {} {} successfully.", alias, verb));
        ui.show_hint(&hints::reload_shell(&outcome.profile_file, self.env.home()));

        Ok(CommandResult::success())
    }
}
