//! # capbind
//!
//! Requests a camera on page load and binds the stream to a video surface.
//! Failures are reported once to a diagnostic channel and never retried.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use capbind::{BinderConfig, CaptureApp, Page};
//! use capbind::media::{EventLoop, MockDeviceAccess, TracingSink};
//! use std::rc::Rc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let event_loop = Rc::new(EventLoop::new()?);
//! let mut page = Page::new();
//! let video = page.add_video_element("webcam");
//!
//! let app = CaptureApp::new(BinderConfig::default())?;
//! let mut handle = app.on_load(
//!     &page,
//!     Rc::new(MockDeviceAccess::granting()),
//!     event_loop.clone(),
//!     Rc::new(TracingSink),
//! );
//!
//! event_loop.block_on(handle.settled());
//! assert!(video.is_playing());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub use capbind_diagnostics as diagnostics;
pub use capbind_media as media;

pub mod app;
pub mod config;
pub mod error;
pub mod page;
#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-export main API types
pub use app::CaptureApp;
pub use config::BinderConfig;
pub use error::{CapbindError, CapbindResult};
pub use page::Page;
