#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

// The browser build starts from `capbind::web::start` instead.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::Context;
    use capbind::diagnostics::init_logging;
    use capbind::media::{BindState, EventLoop, TracingSink};
    use capbind::{BinderConfig, CaptureApp, Page};
    use std::rc::Rc;
    use tracing::{info, warn};

    pub fn run() -> anyhow::Result<()> {
        let config = match std::env::args().nth(1) {
            Some(path) => BinderConfig::load(&path)
                .with_context(|| format!("loading configuration from {}", path))?,
            None => BinderConfig::default(),
        };
        init_logging(&config.log_filter)?;

        let event_loop = Rc::new(EventLoop::new()?);
        let mut page = Page::new();
        let video = page.add_video_element(&config.surface_id);

        #[cfg(feature = "native-camera")]
        let device = Rc::new(capbind::media::NokhwaDeviceAccess::new());
        #[cfg(not(feature = "native-camera"))]
        let device = {
            warn!("Built without native-camera, using the mock device");
            Rc::new(capbind::media::MockDeviceAccess::granting())
        };

        let app = CaptureApp::new(config)?;
        let mut handle = app.on_load(&page, device, event_loop.clone(), Rc::new(TracingSink));
        info!("Capture requested");

        match event_loop.block_on(handle.settled()) {
            BindState::Bound => {
                if let Some(stream) = video.src_object() {
                    info!(stream = %stream.id(), device = stream.label(), "Webcam bound");
                }
            }
            // Already reported through the sink.
            BindState::Failed(_) => {}
            BindState::Pending => warn!("Capture request was dropped before the host answered"),
        }

        Ok(())
    }
}
