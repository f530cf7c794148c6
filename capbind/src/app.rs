//! The on-load capture script

use crate::config::BinderConfig;
use crate::error::CapbindResult;
use capbind_media::{
    BindHandle, CaptureBinder, DeviceAccess, DiagnosticSink, DisplaySurface, LocalSpawner,
    SurfaceLookup,
};
use std::rc::Rc;

/// Runs the page-load capture binding for one configuration
#[derive(Debug, Clone)]
pub struct CaptureApp {
    config: BinderConfig,
}

impl CaptureApp {
    /// Create an app from a validated configuration
    pub fn new(config: BinderConfig) -> CapbindResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    /// Look up the surface in `page`, request the camera and return at once
    ///
    /// Each call issues a fresh request. Failures go to `sink`; the returned
    /// handle only observes the outcome.
    pub fn on_load<P, D>(
        &self,
        page: &P,
        device: Rc<D>,
        spawner: Rc<dyn LocalSpawner>,
        sink: Rc<dyn DiagnosticSink>,
    ) -> BindHandle
    where
        P: SurfaceLookup,
        P::Surface: DisplaySurface<Stream = D::Stream> + 'static,
        D: DeviceAccess + 'static,
    {
        CaptureBinder::new(device, spawner, sink)
            .with_constraints(self.config.constraints)
            .with_surface_id(self.config.surface_id.clone())
            .bind_in(page)
    }
}
