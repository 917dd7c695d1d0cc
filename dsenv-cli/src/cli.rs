//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// dsenv - resolve datasource settings from platform environment variables
#[derive(Parser, Debug)]
#[command(name = "dsenv")]
#[command(version)]
#[command(about = "Resolve MySQL datasource settings from platform environment variables", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the environment and print the datasource overrides
    Resolve(ResolveArgs),

    /// List configuration sources in priority order
    Sources(SourcesArgs),

    /// Display version information
    Version,
}

/// Arguments for the `resolve` command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// TOML files layered below the environment, in priority order
    #[arg(short, long = "config", value_name = "FILE")]
    pub config: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "env")]
    pub format: OutputFormat,

    /// Print the password instead of masking it
    #[arg(long)]
    pub show_secrets: bool,
}

/// Arguments for the `sources` command
#[derive(Args, Debug)]
pub struct SourcesArgs {
    /// TOML files layered below the environment, in priority order
    #[arg(short, long = "config", value_name = "FILE")]
    pub config: Vec<PathBuf>,

    /// Run the MySQL resolver before listing
    #[arg(long)]
    pub resolve: bool,
}

/// Output formats for resolved overrides
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `key=value` lines
    #[default]
    Env,
    /// A JSON object
    Json,
    /// A TOML table
    Toml,
}
