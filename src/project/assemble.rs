//! Project configuration assembly
//!
//! Turns one `.cproject` file into its build and clean tasks. Any failure
//! (unreadable file, malformed XML, broken expression, missing required
//! field) is reported once and yields no tasks for that file only.

use std::path::Path;

use sxd_document::parser;

use crate::config::XPathConfig;
use crate::error::{ProviderError, Warning};
use crate::notify::Notifier;

use super::env::Environment;
use super::fs::FileSystem;
use super::task::{ProjectConfiguration, TaskDescriptor};
use super::xpath::{self, ExtractionOutcome, XPathField};

/// Builds task descriptors from project files
pub struct Assembler<'a> {
    fs: &'a dyn FileSystem,
    notifier: &'a dyn Notifier,
}

impl<'a> Assembler<'a> {
    pub fn new(fs: &'a dyn FileSystem, notifier: &'a dyn Notifier) -> Self {
        Self { fs, notifier }
    }

    /// Build and clean tasks for `path`, or nothing if it cannot be used
    ///
    /// Never fails: problems are delivered to the notifier as exactly one
    /// warning.
    pub fn assemble(
        &self,
        path: &Path,
        xpaths: &XPathConfig,
        env: &Environment,
        project_button: bool,
    ) -> Vec<TaskDescriptor> {
        match self.try_assemble(path, xpaths, env, project_button) {
            Ok(tasks) => tasks,
            Err(err) => {
                tracing::debug!("Skipping {}: {}", path.display(), err);
                self.notifier.warn(Warning::from(&err));
                Vec::new()
            }
        }
    }

    /// Like [`Assembler::assemble`], but returns the error instead of reporting it
    pub fn try_assemble(
        &self,
        path: &Path,
        xpaths: &XPathConfig,
        env: &Environment,
        project_button: bool,
    ) -> Result<Vec<TaskDescriptor>, ProviderError> {
        let configuration = self.read_configuration(path, xpaths)?;
        let cwd = path.parent().unwrap_or_else(|| Path::new("."));

        tracing::debug!(
            "Project '{}' in {} builds with '{}'",
            configuration.name,
            cwd.display(),
            configuration.command
        );
        Ok(configuration.tasks(cwd, env, project_button))
    }

    /// Read and parse `path`, then extract its build settings
    pub fn read_configuration(
        &self,
        path: &Path,
        xpaths: &XPathConfig,
    ) -> Result<ProjectConfiguration, ProviderError> {
        let text = self
            .fs
            .read_to_string(path)
            .map_err(|source| ProviderError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        parse_configuration(path, &text, xpaths)
    }
}

/// Extract the build settings from project file contents
pub fn parse_configuration(
    path: &Path,
    text: &str,
    xpaths: &XPathConfig,
) -> Result<ProjectConfiguration, ProviderError> {
    let package = parser::parse(text).map_err(|e| ProviderError::MalformedDocument {
        path: path.to_path_buf(),
        message: format!("{:?}", e),
    })?;
    let document = package.as_document();

    // Every field is evaluated so the first broken one can be named
    let outcomes: Vec<(XPathField, ExtractionOutcome)> = XPathField::ALL
        .iter()
        .map(|&field| {
            let outcome = xpath::compile(field, xpaths.expression(field))
                .and_then(|compiled| xpath::extract(field, &compiled, &document));
            (field, outcome)
        })
        .collect();

    let mut values = Vec::with_capacity(outcomes.len());
    for (field, outcome) in outcomes {
        values.push((field, outcome?));
    }

    let value = |wanted: XPathField| -> Option<String> {
        values
            .iter()
            .find(|(field, _)| *field == wanted)
            .and_then(|(_, value)| value.clone())
    };
    let required = |field: XPathField| value(field).ok_or(ProviderError::MissingField { field });

    let name = required(XPathField::ProjectName)?;
    let command = required(XPathField::BuilderCommand)?;

    Ok(ProjectConfiguration {
        name,
        command,
        arguments: ProjectConfiguration::split_arguments(
            value(XPathField::BuilderArguments).as_deref(),
        ),
        target: value(XPathField::BuilderTarget),
    })
}
