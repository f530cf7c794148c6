//! Structured logging setup

use crate::error::{DiagnosticsError, DiagnosticsResult};
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor configuration sets one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` wins over `filter`. Calling this twice returns
/// [`DiagnosticsError::AlreadyInitialized`].
pub fn init_logging(filter: &str) -> DiagnosticsResult<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(env_filter) => env_filter,
        Err(_) => parse_filter(filter)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .map_err(|e| DiagnosticsError::AlreadyInitialized {
            reason: e.to_string(),
        })
}

fn parse_filter(filter: &str) -> DiagnosticsResult<EnvFilter> {
    EnvFilter::try_new(filter).map_err(|e| DiagnosticsError::InvalidFilter {
        filter: filter.to_string(),
        reason: e.to_string(),
    })
}
