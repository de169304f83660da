//! MCP Server implementation
//!
//! Implements the MCP tools for cprojecthub using rmcp SDK.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::model::{Implementation, ServerCapabilities, ServerInfo, ToolsCapability};
use rmcp::{tool, ServerHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::{FileSettings, SettingsSource};
use crate::error::Warning;
use crate::notify::CollectingNotifier;
use crate::project::{FileSystem, OsFileSystem, TaskDescriptor};
use crate::provider::CProjectProvider;

/// MCP Server for cprojecthub
///
/// Holds no discovery state: every tool call builds a fresh provider and
/// re-reads the settings.
#[derive(Clone)]
pub struct CProjectServer {
    cwd: PathBuf,
    settings: Arc<dyn SettingsSource>,
    fs: Arc<dyn FileSystem>,
}

impl CProjectServer {
    /// Create a server reading the layered config files
    pub fn new(cwd: impl Into<PathBuf>, config_path: Option<PathBuf>) -> Self {
        Self::with_settings(cwd, Arc::new(FileSettings::new(config_path)))
    }

    /// Create with a specific settings source
    pub fn with_settings(cwd: impl Into<PathBuf>, settings: Arc<dyn SettingsSource>) -> Self {
        Self {
            cwd: cwd.into(),
            settings,
            fs: Arc::new(OsFileSystem),
        }
    }

    fn provider(&self, project: Option<&str>, notifier: Arc<CollectingNotifier>) -> CProjectProvider {
        let provider = CProjectProvider::new(
            self.cwd.clone(),
            self.settings.clone(),
            self.fs.clone(),
            notifier,
        );
        match project.map(str::trim) {
            Some(root) if !root.is_empty() => provider.with_root(root),
            _ => provider,
        }
    }
}

// === Tool Parameter Types ===

/// Parameters for is_eligible and list_build_tasks tools
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ProjectParams {
    /// Project root to search (defaults to the configured root or working directory)
    #[serde(default)]
    pub project: Option<String>,
}

/// Response from is_eligible tool
#[derive(Debug, Serialize)]
pub struct IsEligibleResponse {
    /// Whether any project files were found
    pub eligible: bool,
    /// Project files found, absolute paths
    pub project_files: Vec<String>,
    /// Problems met during discovery
    pub warnings: Vec<Warning>,
}

/// Response from list_build_tasks tool
#[derive(Debug, Serialize)]
pub struct ListBuildTasksResponse {
    /// Directory that was searched
    pub project_root: String,
    /// Build and clean tasks, two per valid project
    pub tasks: Vec<TaskDescriptor>,
    /// Problems met during discovery or extraction
    pub warnings: Vec<Warning>,
}

/// Error response for tools
#[derive(Debug, Serialize)]
struct ToolError {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

impl ToolError {
    fn new(error: impl std::fmt::Display, suggestion: Option<String>) -> String {
        serde_json::to_string_pretty(&ToolError {
            success: false,
            error: error.to_string(),
            suggestion,
        })
        .unwrap_or_else(|_| format!("{{\"success\":false,\"error\":\"{}\"}}", error))
    }
}

// === MCP Tool Implementations ===

#[tool(tool_box)]
impl CProjectServer {
    /// Check whether a workspace contains Eclipse CDT projects
    #[tool(
        description = "Check whether a workspace contains Eclipse CDT projects (.cproject files). Returns the files found."
    )]
    pub async fn is_eligible(&self, #[tool(aggr)] params: ProjectParams) -> String {
        let notifier = Arc::new(CollectingNotifier::new());
        let mut provider = self.provider(params.project.as_deref(), notifier.clone());

        let eligible = provider.is_eligible();
        let response = IsEligibleResponse {
            eligible,
            project_files: provider
                .projects()
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            warnings: notifier.take(),
        };

        serde_json::to_string_pretty(&response)
            .unwrap_or_else(|e| ToolError::new(format!("Serialization error: {}", e), None))
    }

    /// List build and clean tasks for every project in a workspace
    #[tool(
        description = "List build and clean tasks for every Eclipse CDT project in a workspace. Returns command, arguments, working directory, environment and problem matchers."
    )]
    pub async fn list_build_tasks(&self, #[tool(aggr)] params: ProjectParams) -> String {
        let notifier = Arc::new(CollectingNotifier::new());
        let mut provider = self.provider(params.project.as_deref(), notifier.clone());

        let tasks = provider.settings();
        let project_root = provider
            .root()
            .map(|root| root.display().to_string())
            .unwrap_or_default();

        let response = ListBuildTasksResponse {
            project_root,
            tasks,
            warnings: notifier.take(),
        };

        serde_json::to_string_pretty(&response)
            .unwrap_or_else(|e| ToolError::new(format!("Serialization error: {}", e), None))
    }

    /// Get resolved configuration
    #[tool(description = "Get the resolved cprojecthub configuration, including XPath expressions.")]
    pub async fn get_config(&self) -> String {
        let config = match self.settings.load() {
            Ok(config) => config,
            Err(e) => {
                return ToolError::new(
                    format!("{:#}", e),
                    Some("Check the cprojecthub config files and CPROJECTHUB_* variables".into()),
                )
            }
        };

        serde_json::to_string_pretty(&config)
            .unwrap_or_else(|e| ToolError::new(format!("Serialization error: {}", e), None))
    }
}

#[tool(tool_box)]
impl ServerHandler for CProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "cprojecthub".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "MCP server that turns Eclipse CDT .cproject files into build and clean tasks. \
                 Discovery failures and bad XPath expressions are reported as warnings."
                    .to_string(),
            ),
        }
    }
}
