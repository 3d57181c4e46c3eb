//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

/// dal - Named shortcuts for shell commands, mirrored into your shell.
#[derive(Debug, Parser)]
#[command(name = "dal")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true, arg_required_else_help = true)]
pub struct Cli {
    /// Show resolved command lines and extra detail
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show errors and requested output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Print the command an alias would run instead of running it
    #[arg(long)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create or update an alias
    Create(CreateArgs),

    /// Remove an alias
    Remove(RemoveArgs),

    /// List all aliases
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Run an alias: `dal <alias> [extra args...]`
    #[command(external_subcommand)]
    Exec(Vec<String>),
}

/// Arguments for the `create` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CreateArgs {
    /// Command the alias runs
    pub command: String,

    /// Name of the alias
    pub alias: String,

    /// Arguments for the command
    #[arg(short = 'a', long = "args", value_name = "ARGS", allow_hyphen_values = true)]
    pub initial_args: Option<String>,

    /// Run as root (true or false)
    #[arg(
        short = 'r',
        long = "root",
        value_name = "BOOL",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        default_value = "false"
    )]
    pub run_as_root: bool,
}

/// Arguments for the `remove` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RemoveArgs {
    /// Name of the alias
    pub alias: String,

    /// Remove without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
