//! List command implementation.
//!
//! The `dal list` command shows every stored alias, either as a table or
//! as the JSON records kept in the store.

use crate::cli::args::ListArgs;
use crate::config::Environment;
use crate::error::{DoualError, Result};
use crate::manager::AliasManager;
use crate::store::AliasRecord;
use crate::ui::{hints, DoualTheme, Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    env: Environment,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(env: &Environment, args: ListArgs) -> Self {
        Self {
            env: env.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn render_table(records: &[AliasRecord]) -> String {
        let theme = DoualTheme::detect();
        let mut table = Table::new(["Alias", "Command", "Arguments", "Root"]);
        for record in records {
            table.add_row([
                theme.alias.apply_to(&record.alias).to_string(),
                theme.command.apply_to(&record.command).to_string(),
                record.options.initial_args.clone().unwrap_or_default(),
                if record.options.run_as_root { "yes" } else { "no" }.to_string(),
            ]);
        }
        table.render()
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let records = AliasManager::new(&self.env).list()?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&records)
                .map_err(|e| DoualError::Other(anyhow::Error::from(e)))?;
            ui.print(&json);
            return Ok(CommandResult::success());
        }

        if records.is_empty() {
            ui.print("No aliases found.");
            ui.show_hint(hints::first_alias());
            return Ok(CommandResult::success());
        }

        ui.print(&Self::render_table(&records));
        if ui.output_mode().shows_details() {
            for record in &records {
                ui.message(&format!("{} runs `{}`", record.alias, record.command_line()));
            }
        }

        Ok(CommandResult::success())
    }
}
