//! Build task descriptors handed to the host
//!
//! A descriptor only exists for a project whose name and builder command
//! were both extracted; see [`ProjectConfiguration`].

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::env::Environment;
use super::matchers;

/// Target used when the project does not configure one
pub const DEFAULT_TARGET: &str = "all";

/// Target passed to the builder for the clean task
pub const CLEAN_TARGET: &str = "clean";

/// What a task does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskRole {
    Build,
    Clean,
}

impl TaskRole {
    /// Host command that triggers a task with this role
    pub fn host_command(&self) -> &'static str {
        match self {
            TaskRole::Build => "build:trigger",
            TaskRole::Clean => "build:clean",
        }
    }
}

impl fmt::Display for TaskRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskRole::Build => write!(f, "build"),
            TaskRole::Clean => write!(f, "clean"),
        }
    }
}

/// Build settings extracted from one project file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfiguration {
    pub name: String,
    pub command: String,
    /// Positional builder arguments, already split on whitespace
    pub arguments: Vec<String>,
    /// Configured incremental build target, if any
    pub target: Option<String>,
}

impl ProjectConfiguration {
    /// Split a raw argument string on whitespace, dropping empty tokens
    pub fn split_arguments(raw: Option<&str>) -> Vec<String> {
        raw.map(|s| s.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Target for the build task, falling back to [`DEFAULT_TARGET`]
    ///
    /// A blank configured target counts as unset.
    pub fn effective_target(&self) -> &str {
        match self.target.as_deref().map(str::trim) {
            Some(target) if !target.is_empty() => target,
            _ => DEFAULT_TARGET,
        }
    }

    /// Produce the build and clean tasks for this project
    pub fn tasks(&self, cwd: &Path, env: &Environment, project_button: bool) -> Vec<TaskDescriptor> {
        vec![
            self.task(TaskRole::Build, cwd, env, project_button),
            self.task(TaskRole::Clean, cwd, env, project_button),
        ]
    }

    fn task(
        &self,
        role: TaskRole,
        cwd: &Path,
        env: &Environment,
        project_button: bool,
    ) -> TaskDescriptor {
        let (label, target) = match role {
            TaskRole::Build => ("Build", self.effective_target()),
            TaskRole::Clean => ("Clean", CLEAN_TARGET),
        };

        let mut args = self.arguments.clone();
        args.push(target.to_string());

        TaskDescriptor {
            name: format!("{} Project {}", label, self.name),
            exec: self.command.clone(),
            args,
            cwd: cwd.to_path_buf(),
            env: env.clone(),
            error_match: matchers::error_patterns(),
            warning_match: matchers::warning_patterns(),
            role,
            project_button,
        }
    }
}

/// A build or clean task for one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDescriptor {
    name: String,
    exec: String,
    args: Vec<String>,
    cwd: PathBuf,
    env: Environment,
    error_match: Vec<String>,
    warning_match: Vec<String>,
    role: TaskRole,
    project_button: bool,
}

impl TaskDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exec(&self) -> &str {
        &self.exec
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn error_match(&self) -> &[String] {
        &self.error_match
    }

    pub fn warning_match(&self) -> &[String] {
        &self.warning_match
    }

    pub fn role(&self) -> TaskRole {
        self.role
    }

    /// Whether the host may bind a dedicated button to this task
    pub fn project_button(&self) -> bool {
        self.project_button
    }

    /// Full command line, for display
    pub fn command_line(&self) -> String {
        std::iter::once(self.exec.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
