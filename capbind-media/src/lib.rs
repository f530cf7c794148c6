//! # capbind media
//!
//! Capture device access and display surface binding. A [`CaptureBinder`]
//! requests a camera from the host, assigns the granted stream to a display
//! surface and reports failures to a diagnostic sink.

#![warn(clippy::all)]

pub mod binder;
pub mod capture;
pub mod constraints;
pub mod device;
pub mod error;
pub mod event_loop;
pub mod sink;
pub mod stream;
pub mod surface;

// Re-export main types
pub use binder::{BindHandle, BindState, CaptureBinder, DEFAULT_SURFACE_ID};
pub use capture::{MockDeviceAccess, MockOutcome};
pub use constraints::{MediaStreamConstraints, TrackKind};
pub use device::DeviceAccess;
pub use error::{AccessFailureCause, ErrorCategory, MediaError, MediaResult};
pub use event_loop::{LocalSpawner, LocalTask};
pub use sink::{DiagnosticSink, TracingSink, WEBCAM_ERROR_MESSAGE};
pub use stream::MediaStream;
pub use surface::{DisplaySurface, SurfaceLookup, VideoElement};

#[cfg(not(target_arch = "wasm32"))]
pub use event_loop::{CurrentLocalSet, EventLoop};

#[cfg(target_arch = "wasm32")]
pub use capture::{HtmlVideoSurface, WebDeviceAccess, WebDocument};
#[cfg(target_arch = "wasm32")]
pub use event_loop::WasmSpawner;
#[cfg(target_arch = "wasm32")]
pub use sink::ConsoleSink;

#[cfg(all(feature = "native-camera", not(target_arch = "wasm32")))]
pub use capture::NokhwaDeviceAccess;
