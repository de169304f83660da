//! Notification sinks for provider warnings
//!
//! The provider never returns errors to its host. Failures are delivered
//! out-of-band through a [`Notifier`], one call per failure.

use std::sync::Mutex;

use crate::error::Warning;

/// Sink for warnings raised while discovering or reading project files
pub trait Notifier: Send + Sync {
    /// Deliver one warning
    fn warn(&self, warning: Warning);
}

/// Notifier that forwards warnings to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn warn(&self, warning: Warning) {
        tracing::warn!(
            error_type = %warning.error_type,
            field = warning.field.as_deref().unwrap_or("-"),
            "{}: {}",
            warning.title,
            warning.detail
        );
    }
}

/// Notifier that keeps warnings in memory
///
/// Used by the CLI and MCP server to report warnings alongside results.
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    warnings: Mutex<Vec<Warning>>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of warnings collected so far
    pub fn warnings(&self) -> Vec<Warning> {
        match self.warnings.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Remove and return all collected warnings
    pub fn take(&self) -> Vec<Warning> {
        match self.warnings.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn len(&self) -> usize {
        self.warnings().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for CollectingNotifier {
    fn warn(&self, warning: Warning) {
        TracingNotifier.warn(warning.clone());
        match self.warnings.lock() {
            Ok(mut guard) => guard.push(warning),
            Err(poisoned) => poisoned.into_inner().push(warning),
        }
    }
}
