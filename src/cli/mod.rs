//! CLI argument parsing for cli-config.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::scope::Scope;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Manage CLI configs.
///
/// Reads and writes flat key/value YAML config files at three scopes:
/// - global: a per-user file under the home directory
/// - project: the nearest project config above the working directory
/// - local: the nearest local-override config above the working directory
#[derive(Parser, Debug)]
#[command(name = "cli-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show debug output on stderr.
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub debug: bool,

    /// Only report errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for cli-config.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sets a CLI config.
    ///
    /// Updates the key if it exists, otherwise adds it.
    ///
    ///     $ cli-config set path ~/.wp-cli/sites/example
    ///     Success: Added 'path' config.
    Set(SetArgs),

    /// Print the value of a CLI config.
    Get(GetArgs),

    /// List every CLI config in the selected file.
    List(ListArgs),

    /// Remove a CLI config.
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Print the path of the config file for the selected scope.
    Path(PathArgs),
}

/// Scope selection shared by every command.
#[derive(Args, Debug, Clone, Copy)]
pub struct ScopeArgs {
    /// Config file to be considered for operations.
    #[arg(long = "config", value_enum, default_value_t = Scope::Global)]
    pub scope: Scope,
}

/// Output format for read commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Arguments for the `set` command.
#[derive(Parser, Debug)]
pub struct SetArgs {
    /// Name of the CLI config.
    pub name: String,

    /// Value to set CLI config.
    pub value: String,

    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Add a merge directive so the file inherits from a parent config.
    ///
    /// Without a value the parent is the project config file name.
    #[arg(
        long = "local-merge",
        value_name = "INHERIT",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = ""
    )]
    pub local_merge: Option<String>,
}

/// Arguments for the `get` command.
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Name of the CLI config.
    pub name: String,

    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Format for structured values.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

/// Arguments for the `delete` command.
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Name of the CLI config.
    pub name: String,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

/// Arguments for the `path` command.
#[derive(Parser, Debug)]
pub struct PathArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
