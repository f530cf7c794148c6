//! Application level errors

use capbind_diagnostics::DiagnosticsError;
use capbind_media::MediaError;
use thiserror::Error;

/// Errors raised while configuring or starting capbind
#[derive(Error, Debug)]
pub enum CapbindError {
    /// Configuration failed validation
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong
        reason: String,
    },

    /// Configuration file could not be read
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        /// File path
        path: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// Configuration could not be parsed
    #[error("Failed to parse config: {source}")]
    ConfigParse {
        /// Underlying error
        #[from]
        source: serde_json::Error,
    },

    /// Media layer error
    #[error(transparent)]
    Media(#[from] MediaError),

    /// Diagnostics setup error
    #[error(transparent)]
    Diagnostics(#[from] DiagnosticsError),
}

/// Result type alias for capbind operations
pub type CapbindResult<T> = Result<T, CapbindError>;
