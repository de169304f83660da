//! MCP Server module
//!
//! Provides MCP tools over the build task provider:
//! - `is_eligible` - Whether a workspace contains project files
//! - `list_build_tasks` - Build and clean tasks for every project
//! - `get_config` - Get resolved configuration

pub mod server;

pub use server::CProjectServer;
