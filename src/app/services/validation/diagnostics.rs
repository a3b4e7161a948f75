//! Diagnostic emission for validation rejections
//!
//! Every failed field check produces one [`ValidationIssue`] with enough
//! context to locate the offending row even when emission is interleaved
//! across threads. Issues flow into an injected [`DiagnosticSink`] so the
//! validators themselves stay pure and independently testable.

use serde::Serialize;
use std::fmt;
use std::sync::Mutex;
use tracing::error;

/// One rejection record: field name, offending value, row position, record
/// identity, and the issue description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    /// Name of the field that failed its shape check
    pub field: String,
    /// Rendering of the offending value
    pub value: String,
    /// Index of the row within its schedule
    pub row_index: usize,
    /// The row's guid, or the shared sentinel when absent
    pub guid: String,
    /// Rule-specific message, or the value's type name by default
    pub issue: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Data Type Error in Column: {} | GUID: {} | Row: {} | Value: {} | Issue: {}",
            self.field, self.guid, self.row_index, self.value, self.issue
        )
    }
}

/// Receives one issue per rejected field check
pub trait DiagnosticSink {
    fn record(&self, issue: ValidationIssue);
}

/// Production sink: one structured error log line per issue
#[derive(Debug, Default, Clone)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, issue: ValidationIssue) {
        error!("{issue}");
    }
}

/// Buffering sink used by tests and by callers that report issues out of
/// band (e.g. an API response payload)
#[derive(Debug, Default)]
pub struct CollectingSink {
    issues: Mutex<Vec<ValidationIssue>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the collected issues
    pub fn take(&self) -> Vec<ValidationIssue> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of issues collected so far
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ValidationIssue>> {
        // A poisoned buffer still holds the issues recorded so far
        self.issues.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for CollectingSink {
    fn record(&self, issue: ValidationIssue) {
        self.lock().push(issue);
    }
}
