//! Error types for cprojecthub
//!
//! Every failure in the extraction pipeline is recovered locally and turned
//! into a [`Warning`] for the host. Nothing here is meant to abort the
//! provider as a whole.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::project::XPathField;

/// Main error type for discovery and extraction
#[derive(Error, Debug)]
pub enum ProviderError {
    /// A configured XPath expression could not be compiled or evaluated
    #[error("Invalid XPath expression in {field}: {message}")]
    InvalidExpression { field: XPathField, message: String },

    /// A required field evaluated to nothing
    #[error("Required field {field} not found")]
    MissingField { field: XPathField },

    /// The project file is not well-formed XML
    #[error("Malformed project file {}: {message}", path.display())]
    MalformedDocument { path: PathBuf, message: String },

    /// The project file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory entry could not be listed or inspected during discovery
    #[error("Failed to inspect {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings source failed to load
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProviderError {
    /// Field the error is attributable to, if any
    pub fn field(&self) -> Option<XPathField> {
        match self {
            ProviderError::InvalidExpression { field, .. }
            | ProviderError::MissingField { field } => Some(*field),
            _ => None,
        }
    }
}

/// Serializable warning delivered to the notification sink
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Warning {
    pub title: String,
    pub detail: String,
    pub error_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl Warning {
    /// Create a warning without an error attached
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            error_type: "warning".to_string(),
            field: None,
        }
    }
}

impl From<&ProviderError> for Warning {
    fn from(err: &ProviderError) -> Self {
        let field = err.field().map(|f| f.key().to_string());
        match err {
            ProviderError::InvalidExpression { field: f, message } => Warning {
                title: format!("Invalid XPath expression in {}!", f),
                detail: message.clone(),
                error_type: "invalid_expression".to_string(),
                field,
            },
            ProviderError::MissingField { field: f } => Warning {
                title: format!("Invalid XPath expression in {}!", f),
                detail: format!("Expression for {} matched nothing", f),
                error_type: "missing_field".to_string(),
                field,
            },
            ProviderError::MalformedDocument { path, message } => Warning {
                title: format!("Malformed project file {}", path.display()),
                detail: message.clone(),
                error_type: "malformed_document".to_string(),
                field,
            },
            ProviderError::Io { path, source } => Warning {
                title: format!("Cannot read project file {}", path.display()),
                detail: source.to_string(),
                error_type: "io_error".to_string(),
                field,
            },
            ProviderError::Traversal { path, source } => Warning {
                title: format!("Skipping {}", path.display()),
                detail: source.to_string(),
                error_type: "traversal_error".to_string(),
                field,
            },
            ProviderError::Config(msg) => Warning {
                title: "Configuration error, using defaults".to_string(),
                detail: msg.clone(),
                error_type: "config_error".to_string(),
                field,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_expression_warning_names_field() {
        let err = ProviderError::InvalidExpression {
            field: XPathField::BuilderCommand,
            message: "unexpected token".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid XPath expression in builderCommand: unexpected token"
        );

        let warning = Warning::from(&err);
        assert_eq!(warning.title, "Invalid XPath expression in builderCommand!");
        assert_eq!(warning.detail, "unexpected token");
        assert_eq!(warning.error_type, "invalid_expression");
        assert_eq!(warning.field, Some("builderCommand".to_string()));
    }

    #[test]
    fn test_missing_field_warning() {
        let err = ProviderError::MissingField {
            field: XPathField::ProjectName,
        };
        assert_eq!(err.to_string(), "Required field projectName not found");

        let warning = Warning::from(&err);
        assert_eq!(warning.error_type, "missing_field");
        assert!(warning.detail.contains("matched nothing"));
        assert_eq!(warning.field, Some("projectName".to_string()));
    }

    #[test]
    fn test_traversal_warning_has_no_field() {
        let err = ProviderError::Traversal {
            path: PathBuf::from("/ws/locked"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.field().is_none());

        let warning = Warning::from(&err);
        assert_eq!(warning.error_type, "traversal_error");
        assert!(warning.title.contains("/ws/locked"));
        assert!(warning.field.is_none());
    }

    #[test]
    fn test_malformed_document_error() {
        let err = ProviderError::MalformedDocument {
            path: PathBuf::from("/ws/.cproject"),
            message: "unclosed element".to_string(),
        };
        assert!(err.to_string().contains("Malformed project file /ws/.cproject"));
        assert_eq!(Warning::from(&err).error_type, "malformed_document");
    }

    #[test]
    fn test_warning_skips_empty_field() {
        let warning = Warning::new("Heads up", "something happened");

        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"title\":\"Heads up\""));
        assert!(!json.contains("field"));
    }
}
