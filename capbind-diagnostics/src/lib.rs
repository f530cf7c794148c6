//! # capbind diagnostics
//!
//! Logging initialisation and an inspectable record of capture failures.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod log;
pub mod logging;

pub use error::{DiagnosticsError, DiagnosticsResult};
pub use log::{DiagnosticEntry, DiagnosticLog};
pub use logging::{init_logging, DEFAULT_LOG_FILTER};
