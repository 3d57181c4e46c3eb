//! Contextual hint text for dal commands.

use std::path::Path;

use crate::shell::ShellType;

/// Tell the user how to pick up a changed startup file.
pub fn reload_shell(profile_file: &Path, home: &Path) -> String {
    let shown = match profile_file.strip_prefix(home) {
        Ok(relative) => format!("~/{}", relative.display()),
        Err(_) => profile_file.display().to_string(),
    };
    format!(
        "Run `source {}` or open a new terminal for the change to take effect.",
        shown
    )
}

/// Suggest how to see what is stored.
pub fn after_not_found() -> &'static str {
    "Run `dal list` to see the stored aliases."
}

/// Suggest how to create the first alias.
pub fn first_alias() -> &'static str {
    "Create one with `dal create <command> <alias>`."
}

/// Mention the shell whose startup file is being updated.
pub fn shell_target(shell: ShellType) -> String {
    format!("Aliases are mirrored into your {} startup file.", shell.name())
}
