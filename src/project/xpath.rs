//! XPath field extraction
//!
//! Each field is compiled and evaluated on its own so that a broken
//! expression can be reported against the field it belongs to.

use std::fmt;

use serde::Serialize;
use sxd_document::dom::Document;
use sxd_xpath::{Context, Factory, Value, XPath};

use crate::error::ProviderError;

/// Result of extracting one field: present, absent, or failed
pub type ExtractionOutcome = Result<Option<String>, ProviderError>;

/// The four fields read from a project file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum XPathField {
    ProjectName,
    BuilderCommand,
    BuilderArguments,
    BuilderTarget,
}

impl XPathField {
    /// All fields, in the order they are evaluated and reported
    pub const ALL: [XPathField; 4] = [
        XPathField::ProjectName,
        XPathField::BuilderCommand,
        XPathField::BuilderArguments,
        XPathField::BuilderTarget,
    ];

    /// Name of the setting as the host knows it
    pub fn key(&self) -> &'static str {
        match self {
            XPathField::ProjectName => "projectName",
            XPathField::BuilderCommand => "builderCommand",
            XPathField::BuilderArguments => "builderArguments",
            XPathField::BuilderTarget => "builderTarget",
        }
    }

    /// Whether a project is unusable without this field
    pub fn is_required(&self) -> bool {
        matches!(self, XPathField::ProjectName | XPathField::BuilderCommand)
    }
}

impl fmt::Display for XPathField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Compile the expression configured for `field`
pub fn compile(field: XPathField, expression: &str) -> Result<XPath, ProviderError> {
    let invalid = |message: String| ProviderError::InvalidExpression { field, message };

    Factory::new()
        .build(expression)
        .map_err(|e| invalid(e.to_string()))?
        .ok_or_else(|| invalid("expression is empty".to_string()))
}

/// Evaluate a compiled expression against a document
///
/// A string result is returned as is; a node-set yields the string value of
/// its first node in document order, even when that value is empty. An empty
/// node-set is absent, which is not an error.
pub fn extract(field: XPathField, xpath: &XPath, document: &Document<'_>) -> ExtractionOutcome {
    let context = Context::new();
    let value = xpath
        .evaluate(&context, document.root())
        .map_err(|e| ProviderError::InvalidExpression {
            field,
            message: e.to_string(),
        })?;

    let raw = match value {
        Value::String(s) => Some(s),
        Value::Nodeset(nodes) => nodes.document_order_first().map(|n| n.string_value()),
        Value::Boolean(_) | Value::Number(_) => {
            tracing::debug!("Expression for {} did not select a node or string", field);
            None
        }
    };

    Ok(raw)
}
