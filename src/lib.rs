//! cprojecthub - Build task provider for Eclipse CDT workspaces
//!
//! Finds `.cproject` files below a project root, pulls the project name and
//! builder settings out of each one with configurable XPath expressions, and
//! turns them into build and clean task descriptors for a host:
//! - **Discovery** - recursive or single-file search for `.cproject`
//! - **Extraction** - four XPath fields per project, two of them required
//! - **Tasks** - `Build Project <name>` and `Clean Project <name>`
//!
//! ## Features
//!
//! - XDG-compliant layered configuration, re-read on every request
//! - Failures reported as warnings, never as errors to the host
//! - Per-project isolation: one broken file never hides the others
//! - MCP tools for agent integration
//!
//! ## MCP Tools
//!
//! - `is_eligible` - Whether the workspace contains any project files
//! - `list_build_tasks` - Build and clean tasks for every project
//! - `get_config` - Get resolved configuration

pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;
pub mod notify;
pub mod project;
pub mod provider;

pub use cli::{Cli, Commands};
pub use config::{Config, DiscoveryMode, FileSettings, SettingsSource, XPathConfig};
pub use error::{ProviderError, Warning};
pub use mcp::CProjectServer;
pub use notify::{CollectingNotifier, Notifier, TracingNotifier};
pub use project::{
    Environment, FileSystem, OsFileSystem, ProjectConfiguration, TaskDescriptor, TaskRole,
    XPathField,
};
pub use provider::{CProjectProvider, ProviderState, NICE_NAME};
