//! Capture binder
//!
//! Looks up a display surface, issues one capture request and, once the host
//! answers, either assigns the granted stream to the surface or reports the
//! failure to a diagnostic sink. The binder never retries and never touches
//! the surface on failure.
//!
//! ```text
//! Pending ──grant──▶ Bound
//!    │
//!    └───error─────▶ Failed
//! ```
//!
//! Both end states are terminal. A host that never answers leaves the binding
//! in `Pending` for good.

use crate::constraints::MediaStreamConstraints;
use crate::device::DeviceAccess;
use crate::error::MediaError;
use crate::event_loop::LocalSpawner;
use crate::sink::{DiagnosticSink, WEBCAM_ERROR_MESSAGE};
use crate::surface::{DisplaySurface, SurfaceLookup};
use std::rc::Rc;
use tokio::sync::watch;
use tracing::{debug, info};

/// Element id the binder looks up when none is configured
pub const DEFAULT_SURFACE_ID: &str = "webcam";

/// Progress of a single binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindState {
    /// Request issued, host has not answered
    Pending,
    /// Stream assigned to the surface
    Bound,
    /// Request failed or the stream could not be assigned
    Failed(MediaError),
}

impl BindState {
    pub fn is_pending(&self) -> bool {
        matches!(self, BindState::Pending)
    }

    pub fn is_bound(&self) -> bool {
        matches!(self, BindState::Bound)
    }

    /// Error that ended the binding, if any
    pub fn error(&self) -> Option<&MediaError> {
        match self {
            BindState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Observer of one binding's state
#[derive(Debug, Clone)]
pub struct BindHandle {
    state: watch::Receiver<BindState>,
}

impl BindHandle {
    /// Current state without waiting
    pub fn state(&self) -> BindState {
        self.state.borrow().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().is_pending()
    }

    /// Wait for the terminal state
    ///
    /// Returns `Pending` only if the binding task was dropped before the host
    /// answered, e.g. because its event loop went away.
    pub async fn settled(&mut self) -> BindState {
        let settled = match self.state.wait_for(|state| !state.is_pending()).await {
            Ok(state) => Some(state.clone()),
            Err(_) => None,
        };
        settled.unwrap_or_else(|| self.state())
    }
}

/// Binds a capture stream to a display surface
pub struct CaptureBinder<D: DeviceAccess> {
    device: Rc<D>,
    spawner: Rc<dyn LocalSpawner>,
    sink: Rc<dyn DiagnosticSink>,
    constraints: MediaStreamConstraints,
    surface_id: String,
}

impl<D> CaptureBinder<D>
where
    D: DeviceAccess + 'static,
{
    /// Create a binder requesting video only for the `webcam` surface
    pub fn new(device: Rc<D>, spawner: Rc<dyn LocalSpawner>, sink: Rc<dyn DiagnosticSink>) -> Self {
        Self {
            device,
            spawner,
            sink,
            constraints: MediaStreamConstraints::video_only(),
            surface_id: DEFAULT_SURFACE_ID.to_string(),
        }
    }

    /// Set the request constraints
    pub fn with_constraints(mut self, constraints: MediaStreamConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Set the id of the surface to look up
    pub fn with_surface_id(mut self, surface_id: impl Into<String>) -> Self {
        self.surface_id = surface_id.into();
        self
    }

    pub fn constraints(&self) -> &MediaStreamConstraints {
        &self.constraints
    }

    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    /// Look the surface up in `page`, then bind to whatever was found
    ///
    /// The lookup happens now, before the request is issued.
    pub fn bind_in<P>(&self, page: &P) -> BindHandle
    where
        P: SurfaceLookup,
        P::Surface: DisplaySurface<Stream = D::Stream> + 'static,
    {
        let surface = page.get_element_by_id(&self.surface_id);
        if surface.is_none() {
            debug!(surface = %self.surface_id, "Display surface missing at lookup time");
        }
        self.bind(surface)
    }

    /// Issue the capture request and return without waiting for it
    ///
    /// Every call issues a new, independent request.
    pub fn bind<S>(&self, surface: Option<S>) -> BindHandle
    where
        S: DisplaySurface<Stream = D::Stream> + 'static,
    {
        let (state_tx, state_rx) = watch::channel(BindState::Pending);

        let device = self.device.clone();
        let sink = self.sink.clone();
        let constraints = self.constraints;
        let surface_id = self.surface_id.clone();

        info!(
            backend = device.backend_name(),
            video = constraints.video,
            audio = constraints.audio,
            surface = %surface_id,
            "Requesting capture device"
        );

        let task = async move {
            let outcome = match constraints.validate() {
                Ok(()) => device.request(&constraints).await,
                Err(error) => Err(error),
            };

            let outcome = outcome.and_then(|stream| match &surface {
                Some(surface) => {
                    surface.set_src_object(Some(&stream));
                    Ok(())
                }
                None => Err(MediaError::SurfaceNotFound {
                    surface_id: surface_id.clone(),
                }),
            });

            let state = match outcome {
                Ok(()) => {
                    info!(surface = %surface_id, "Capture stream bound to display surface");
                    BindState::Bound
                }
                Err(error) => {
                    sink.report(WEBCAM_ERROR_MESSAGE, &error);
                    BindState::Failed(error)
                }
            };
            state_tx.send_replace(state);
        };

        self.spawner.spawn_local(Box::pin(task));
        BindHandle { state: state_rx }
    }
}
