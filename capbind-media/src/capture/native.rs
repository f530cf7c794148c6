//! Native camera access through nokhwa
//!
//! The camera is opened and owned by a dedicated thread so the event loop is
//! never blocked by driver calls. The thread keeps the stream open until every
//! clone of the returned handle has been dropped.

use crate::constraints::{MediaStreamConstraints, TrackKind};
use crate::device::DeviceAccess;
use crate::error::{AccessFailureCause, MediaError, MediaResult};
use crate::stream::MediaStream;
use async_trait::async_trait;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::{Camera, NokhwaError};
use std::sync::mpsc;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

/// Opens a local camera by index
#[derive(Debug, Clone)]
pub struct NokhwaDeviceAccess {
    index: u32,
}

impl NokhwaDeviceAccess {
    /// Use the first camera the OS reports
    pub fn new() -> Self {
        Self::with_index(0)
    }

    pub fn with_index(index: u32) -> Self {
        Self { index }
    }
}

impl Default for NokhwaDeviceAccess {
    fn default() -> Self {
        Self::new()
    }
}

/// Held by the stream handle; dropping it lets the camera thread close the device
struct CameraRelease {
    _release_tx: mpsc::Sender<()>,
}

#[async_trait(?Send)]
impl DeviceAccess for NokhwaDeviceAccess {
    type Stream = MediaStream;

    fn backend_name(&self) -> &str {
        "nokhwa"
    }

    async fn request(&self, constraints: &MediaStreamConstraints) -> MediaResult<MediaStream> {
        if !constraints.video {
            return Err(MediaError::InvalidConstraints {
                message: "Native backend only captures video".to_string(),
            });
        }
        if constraints.audio {
            warn!("Audio capture is not supported by the native backend, ignoring");
        }

        let (ready_tx, ready_rx) = oneshot::channel::<MediaResult<String>>();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let index = self.index;

        std::thread::Builder::new()
            .name("capbind-camera".to_string())
            .spawn(move || {
                let requested = RequestedFormat::new::<RgbFormat>(
                    RequestedFormatType::AbsoluteHighestFrameRate,
                );
                let mut camera = match Camera::new(CameraIndex::Index(index), requested) {
                    Ok(camera) => camera,
                    Err(e) => {
                        let _ = ready_tx.send(Err(device_error(e)));
                        return;
                    }
                };

                if let Err(e) = camera.open_stream() {
                    let _ = ready_tx.send(Err(device_error(e)));
                    return;
                }

                let label = camera.info().human_name();
                info!(camera = %label, index, "Camera stream opened");
                if ready_tx.send(Ok(label)).is_ok() {
                    // Returns once the last stream handle is gone.
                    let _ = release_rx.recv();
                }

                if let Err(e) = camera.stop_stream() {
                    warn!("Failed to stop camera stream: {}", e);
                }
                debug!(index, "Camera thread finished");
            })
            .map_err(|e| MediaError::Backend {
                backend: "nokhwa".to_string(),
                message: format!("Failed to spawn camera thread: {}", e),
            })?;

        let label = ready_rx.await.map_err(|_| MediaError::Backend {
            backend: "nokhwa".to_string(),
            message: "Camera thread exited without answering".to_string(),
        })??;

        Ok(MediaStream::with_release_guard(
            label,
            vec![TrackKind::Video],
            CameraRelease {
                _release_tx: release_tx,
            },
        ))
    }
}

fn device_error(error: NokhwaError) -> MediaError {
    let message = error.to_string();
    MediaError::device_access(classify(&message), message)
}

/// nokhwa reports every failure as free text, so the cause is a best guess
fn classify(message: &str) -> AccessFailureCause {
    let lower = message.to_lowercase();
    if lower.contains("permission") || lower.contains("not authorized") || lower.contains("denied")
    {
        AccessFailureCause::PermissionDenied
    } else if lower.contains("not found") || lower.contains("no such") || lower.contains("no device")
    {
        AccessFailureCause::NoDevice
    } else if lower.contains("busy") || lower.contains("in use") {
        AccessFailureCause::DeviceBusy
    } else {
        AccessFailureCause::Unknown
    }
}
