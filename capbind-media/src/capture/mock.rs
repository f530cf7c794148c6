//! Scripted device access for tests and camera-less hosts

use crate::constraints::MediaStreamConstraints;
use crate::device::DeviceAccess;
use crate::error::{AccessFailureCause, MediaError, MediaResult};
use crate::stream::MediaStream;
use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

/// What the mock host answers with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOutcome {
    /// Grant a fresh stream per request
    Grant,
    /// Reject every request with this cause
    Deny(AccessFailureCause),
    /// Never answer, like an ignored permission prompt
    NeverResolve,
}

/// Mock device access backend
#[derive(Debug)]
pub struct MockDeviceAccess {
    label: String,
    outcome: Mutex<MockOutcome>,
    requests: Mutex<Vec<MediaStreamConstraints>>,
    granted: Mutex<Vec<MediaStream>>,
}

impl MockDeviceAccess {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            label: "Mock Camera".to_string(),
            outcome: Mutex::new(outcome),
            requests: Mutex::new(Vec::new()),
            granted: Mutex::new(Vec::new()),
        }
    }

    pub fn granting() -> Self {
        Self::new(MockOutcome::Grant)
    }

    pub fn denying(cause: AccessFailureCause) -> Self {
        Self::new(MockOutcome::Deny(cause))
    }

    pub fn never_resolving() -> Self {
        Self::new(MockOutcome::NeverResolve)
    }

    /// Change the answer for subsequent requests
    pub fn set_outcome(&self, outcome: MockOutcome) {
        *self.outcome.lock() = outcome;
    }

    /// Number of requests issued so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Constraints of every request, in order
    pub fn requests(&self) -> Vec<MediaStreamConstraints> {
        self.requests.lock().clone()
    }

    /// Streams handed out so far, in order
    pub fn granted_streams(&self) -> Vec<MediaStream> {
        self.granted.lock().clone()
    }
}

impl Default for MockDeviceAccess {
    fn default() -> Self {
        Self::granting()
    }
}

#[async_trait(?Send)]
impl DeviceAccess for MockDeviceAccess {
    type Stream = MediaStream;

    fn backend_name(&self) -> &str {
        "mock"
    }

    async fn request(&self, constraints: &MediaStreamConstraints) -> MediaResult<MediaStream> {
        self.requests.lock().push(*constraints);
        let outcome = self.outcome.lock().clone();
        debug!(?outcome, "Mock capture request");

        match outcome {
            MockOutcome::Grant => {
                let stream = MediaStream::new(self.label.clone(), constraints.requested_kinds());
                self.granted.lock().push(stream.clone());
                Ok(stream)
            }
            MockOutcome::Deny(cause) => Err(MediaError::device_access(
                cause,
                format!("Mock host rejected the request ({})", cause),
            )),
            MockOutcome::NeverResolve => futures::future::pending().await,
        }
    }
}
