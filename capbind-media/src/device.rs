//! Host device-access facility

use crate::constraints::MediaStreamConstraints;
use crate::error::MediaResult;
use async_trait::async_trait;

/// Grants capture devices as live streams
///
/// Futures returned by hosts are not required to be `Send`; the binder drives
/// them on a single-threaded queue.
#[async_trait(?Send)]
pub trait DeviceAccess {
    /// Stream handle type produced on success
    type Stream: Clone + 'static;

    /// Backend name used in logs
    fn backend_name(&self) -> &str;

    /// Ask the host for a stream matching `constraints`
    ///
    /// Resolves at most once. A host may never resolve, for example while a
    /// permission prompt stays unanswered.
    async fn request(&self, constraints: &MediaStreamConstraints) -> MediaResult<Self::Stream>;
}
