//! MCP server launcher
//!
//! Starts the MCP server over stdio.

use std::path::Path;

use anyhow::{Context, Result};
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};

use crate::mcp::CProjectServer;

/// Run the MCP server over stdio.
///
/// Settings are read per request, so `config_path` is only remembered
/// here, not loaded.
pub async fn run_mcp_server(config_path: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let server = CProjectServer::new(cwd, config_path.map(Path::to_path_buf));

    tracing::info!("Starting MCP server on stdio");

    let transport = (stdin(), stdout());
    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
