//! CLI command definitions using clap
//!
//! Defines all CLI subcommands and their arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Build task provider for Eclipse CDT projects.
///
/// Finds .cproject files, extracts their builder settings and prints
/// build and clean tasks. Can also serve them over MCP.
#[derive(Parser, Debug)]
#[command(name = "cprojecthub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (overrides default XDG paths)
    #[arg(short, long, global = true, env = "CPROJECTHUB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start MCP server over stdio
    Mcp,

    /// List build and clean tasks for every project in the workspace
    Tasks(TasksArgs),

    /// List the project files found under the project root
    Locate(LocateArgs),

    /// Show resolved configuration
    Config(ConfigArgs),
}

/// Arguments for the `tasks` subcommand
#[derive(Parser, Debug)]
pub struct TasksArgs {
    /// Project root (defaults to the configured root or current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the `locate` subcommand
#[derive(Parser, Debug)]
pub struct LocateArgs {
    /// Project root (defaults to the configured root or current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    Table,
    /// JSON output
    Json,
    /// Plain text (one entry per line)
    Plain,
}

/// Arguments for the `config` subcommand
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Output format (table prints TOML)
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}
