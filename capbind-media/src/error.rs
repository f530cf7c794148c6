//! Capture binding error types
//!
//! Every failure the host can report while granting a capture device is folded
//! into a single [`MediaError::DeviceAccess`] kind. The [`AccessFailureCause`]
//! it carries is informational only; callers are expected to treat all causes
//! the same way.

use thiserror::Error;

/// Main error type for capture binding operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// The host refused or could not provide a capture device
    #[error("Device access failed ({cause}): {message}")]
    DeviceAccess {
        /// Best-effort classification of the failure
        cause: AccessFailureCause,
        /// Host supplied detail
        message: String,
    },

    /// Constraints cannot be satisfied by any host
    #[error("Invalid constraints: {message}")]
    InvalidConstraints {
        /// Error message
        message: String,
    },

    /// The display surface was not present in the page
    #[error("Display surface not found: {surface_id}")]
    SurfaceNotFound {
        /// Identifier the surface was looked up by
        surface_id: String,
    },

    /// Unsupported platform error
    #[error("Unsupported platform: {platform}")]
    UnsupportedPlatform {
        /// Platform name
        platform: String,
    },

    /// Error raised by a capture backend outside of the device request itself
    #[error("Backend error: {backend} - {message}")]
    Backend {
        /// Backend name
        backend: String,
        /// Error message
        message: String,
    },
}

/// Result type alias for media operations
pub type MediaResult<T> = Result<T, MediaError>;

impl MediaError {
    /// Shorthand for a [`MediaError::DeviceAccess`] error
    pub fn device_access(cause: AccessFailureCause, message: impl Into<String>) -> Self {
        MediaError::DeviceAccess {
            cause,
            message: message.into(),
        }
    }

    /// Get error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            MediaError::DeviceAccess { .. } => ErrorCategory::Device,
            MediaError::InvalidConstraints { .. } => ErrorCategory::Configuration,
            MediaError::SurfaceNotFound { .. } => ErrorCategory::Surface,
            MediaError::UnsupportedPlatform { .. } => ErrorCategory::Platform,
            MediaError::Backend { .. } => ErrorCategory::System,
        }
    }
}

/// Error categories for classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Capture device errors
    Device,
    /// Configuration and parameter errors
    Configuration,
    /// Display surface errors
    Surface,
    /// Platform compatibility errors
    Platform,
    /// Backend and runtime errors
    System,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorCategory::Device => "device",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Surface => "surface",
            ErrorCategory::Platform => "platform",
            ErrorCategory::System => "system",
        };
        f.write_str(name)
    }
}

/// Why the host did not grant a capture device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessFailureCause {
    /// The user or the host policy denied access
    PermissionDenied,
    /// No capture device matches the request
    NoDevice,
    /// The device exists but could not be opened
    DeviceBusy,
    /// Anything the host did not classify
    Unknown,
}

impl AccessFailureCause {
    /// Map a DOMException name as raised by `getUserMedia`
    pub fn from_dom_name(name: &str) -> Self {
        match name {
            "NotAllowedError" | "SecurityError" | "PermissionDeniedError" => {
                AccessFailureCause::PermissionDenied
            }
            "NotFoundError" | "OverconstrainedError" | "DevicesNotFoundError" => {
                AccessFailureCause::NoDevice
            }
            "NotReadableError" | "AbortError" | "TrackStartError" => {
                AccessFailureCause::DeviceBusy
            }
            _ => AccessFailureCause::Unknown,
        }
    }
}

impl std::fmt::Display for AccessFailureCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AccessFailureCause::PermissionDenied => "permission denied",
            AccessFailureCause::NoDevice => "no device",
            AccessFailureCause::DeviceBusy => "device busy",
            AccessFailureCause::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let denied = MediaError::device_access(AccessFailureCause::PermissionDenied, "denied");
        assert_eq!(denied.category(), ErrorCategory::Device);

        let busy = MediaError::device_access(AccessFailureCause::DeviceBusy, "in use");
        assert_eq!(busy.category(), ErrorCategory::Device);

        let missing = MediaError::SurfaceNotFound {
            surface_id: "webcam".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Surface);
    }

    #[test]
    fn test_error_display() {
        let error = MediaError::device_access(
            AccessFailureCause::PermissionDenied,
            "Permission denied by user",
        );
        assert_eq!(
            error.to_string(),
            "Device access failed (permission denied): Permission denied by user"
        );
    }

    #[test]
    fn test_dom_exception_mapping() {
        assert_eq!(
            AccessFailureCause::from_dom_name("NotAllowedError"),
            AccessFailureCause::PermissionDenied
        );
        assert_eq!(
            AccessFailureCause::from_dom_name("NotFoundError"),
            AccessFailureCause::NoDevice
        );
        assert_eq!(
            AccessFailureCause::from_dom_name("NotReadableError"),
            AccessFailureCause::DeviceBusy
        );
        assert_eq!(
            AccessFailureCause::from_dom_name("TypeError"),
            AccessFailureCause::Unknown
        );
    }
}
