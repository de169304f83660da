//! Configuration model for cprojecthub
//!
//! Mirrors the settings surface a host exposes to the user: environment
//! variables, the project root, and the XPath expressions used to pull
//! build settings out of `.cproject` files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::project::XPathField;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Environment variables for build tasks, in `NAME=value` form
    #[serde(default)]
    pub environment_variables: Vec<String>,

    /// Directory to search for project files (empty means working directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_root_directory: Option<String>,

    /// How project files are discovered under the root
    #[serde(default)]
    pub discovery: DiscoveryMode,

    /// Mark produced tasks as candidates for dedicated host buttons
    #[serde(default)]
    pub project_buttons: bool,

    /// XPath expressions used to extract build settings
    #[serde(default)]
    pub xpath: XPathConfig,
}

/// Project file discovery strategy
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiscoveryMode {
    /// Walk the whole tree below the root
    #[default]
    Recursive,
    /// Only look at `<root>/.cproject`
    Single,
}

/// XPath expressions for the four extracted fields
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct XPathConfig {
    #[serde(default = "default_project_name")]
    pub project_name: String,

    #[serde(default = "default_builder_command")]
    pub builder_command: String,

    #[serde(default = "default_builder_arguments")]
    pub builder_arguments: String,

    #[serde(default = "default_builder_target")]
    pub builder_target: String,
}

fn default_project_name() -> String {
    "//storageModule[@moduleId='cdtBuildSystem']/project/@name".to_string()
}

fn default_builder_command() -> String {
    "//storageModule[@moduleId='cdtBuildSystem']//builder/@command".to_string()
}

fn default_builder_arguments() -> String {
    "//storageModule[@moduleId='cdtBuildSystem']//builder/@arguments".to_string()
}

fn default_builder_target() -> String {
    "//storageModule[@moduleId='cdtBuildSystem']//builder/@incrementalBuildTarget".to_string()
}

impl Default for XPathConfig {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            builder_command: default_builder_command(),
            builder_arguments: default_builder_arguments(),
            builder_target: default_builder_target(),
        }
    }
}

impl XPathConfig {
    /// Expression configured for a field
    pub fn expression(&self, field: XPathField) -> &str {
        match field {
            XPathField::ProjectName => &self.project_name,
            XPathField::BuilderCommand => &self.builder_command,
            XPathField::BuilderArguments => &self.builder_arguments,
            XPathField::BuilderTarget => &self.builder_target,
        }
    }
}

impl Config {
    /// Resolve the directory to search for project files
    ///
    /// Expands `~` and `$VAR` references. Relative paths are resolved
    /// against `cwd`; an unset or blank value means `cwd` itself.
    pub fn project_root(&self, cwd: &Path) -> PathBuf {
        let raw = match self.project_root_directory.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return cwd.to_path_buf(),
        };

        let expanded = match shellexpand::full(raw) {
            Ok(expanded) => expanded.into_owned(),
            Err(e) => {
                tracing::debug!("Could not expand project root '{}': {}", raw, e);
                raw.to_string()
            }
        };

        let path = PathBuf::from(expanded);
        if path.is_absolute() {
            path
        } else {
            cwd.join(path)
        }
    }
}
