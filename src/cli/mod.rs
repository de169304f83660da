//! CLI module for cprojecthub
//!
//! Provides command-line interface with the following subcommands:
//! - `mcp` - Start MCP server over stdio
//! - `tasks` - List build and clean tasks for the workspace
//! - `locate` - List discovered project files
//! - `config` - Show configuration

pub mod commands;
pub mod mcp;

pub use commands::{Cli, Commands};
pub use mcp::run_mcp_server;
