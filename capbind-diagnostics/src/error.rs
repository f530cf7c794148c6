//! Diagnostics error types

use thiserror::Error;

/// Errors raised while setting up or exporting diagnostics
#[derive(Error, Debug)]
pub enum DiagnosticsError {
    /// The log filter directive could not be parsed
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// Filter as given
        filter: String,
        /// Parser message
        reason: String,
    },

    /// A global subscriber is already installed
    #[error("Logging already initialized: {reason}")]
    AlreadyInitialized {
        /// Subscriber message
        reason: String,
    },

    /// Serialization failed
    #[error("Serialization error: {source}")]
    Serialization {
        /// Underlying error
        #[from]
        source: serde_json::Error,
    },
}

/// Result type alias for diagnostics operations
pub type DiagnosticsResult<T> = Result<T, DiagnosticsError>;
