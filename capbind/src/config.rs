//! Configuration types and defaults

use crate::error::{CapbindError, CapbindResult};
use capbind_diagnostics::DEFAULT_LOG_FILTER;
use capbind_media::{MediaStreamConstraints, DEFAULT_SURFACE_ID};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Binder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinderConfig {
    /// Id of the display surface to bind
    pub surface_id: String,
    /// Media kinds to request
    pub constraints: MediaStreamConstraints,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            surface_id: DEFAULT_SURFACE_ID.to_string(),
            constraints: MediaStreamConstraints::video_only(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl BinderConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> CapbindResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> CapbindResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CapbindError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Validate configuration
    pub fn validate(&self) -> CapbindResult<()> {
        if self.surface_id.trim().is_empty() {
            return Err(CapbindError::InvalidConfig {
                reason: "surface_id must not be empty".to_string(),
            });
        }
        self.constraints.validate()?;
        Ok(())
    }
}
