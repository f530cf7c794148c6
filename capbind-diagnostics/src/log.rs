//! In-memory record of reported capture failures

use crate::error::DiagnosticsResult;
use capbind_media::{DiagnosticSink, MediaError, TracingSink};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;

/// One reported failure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticEntry {
    /// When the report arrived
    pub timestamp: DateTime<Utc>,
    /// Error category
    pub category: String,
    /// Free-text message passed by the reporter
    pub message: String,
    /// Rendered error
    pub error: String,
}

impl DiagnosticEntry {
    /// Message and error as a single line
    pub fn line(&self) -> String {
        format!("{}{}", self.message, self.error)
    }
}

/// Sink that forwards to `tracing` and keeps every entry
#[derive(Debug, Default)]
pub struct DiagnosticLog {
    entries: Mutex<Vec<DiagnosticEntry>>,
}

impl DiagnosticLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries, oldest first
    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.entries.lock().clone()
    }

    /// Number of reports received
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether nothing was reported
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Export entries as pretty JSON
    pub fn to_json(&self) -> DiagnosticsResult<String> {
        Ok(serde_json::to_string_pretty(&*self.entries.lock())?)
    }
}

impl DiagnosticSink for DiagnosticLog {
    fn report(&self, message: &str, error: &MediaError) {
        TracingSink.report(message, error);
        self.entries.lock().push(DiagnosticEntry {
            timestamp: Utc::now(),
            category: error.category().to_string(),
            message: message.to_string(),
            error: error.to_string(),
        });
    }
}
