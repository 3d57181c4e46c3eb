//! Shell integration: detection, startup file sync, and command execution.

pub mod command;
pub mod platform;
pub mod profile;

pub use command::{execute_inherited, CommandResult};
pub use platform::{is_ci, ShellType};
pub use profile::{alias_line, ProfileSync};
