//! Display surfaces a stream can be bound to

use crate::stream::MediaStream;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// A page element able to render a live stream
pub trait DisplaySurface {
    /// Stream handle type the surface accepts
    type Stream;

    /// Identifier the surface was looked up by
    fn surface_id(&self) -> &str;

    /// Replace the render source. `None` clears it.
    fn set_src_object(&self, stream: Option<&Self::Stream>);
}

/// Finds display surfaces by element id
pub trait SurfaceLookup {
    type Surface: DisplaySurface;

    fn get_element_by_id(&self, id: &str) -> Option<Self::Surface>;
}

/// In-memory video element for native hosts
///
/// Clones refer to the same element, so a page can hand one out while still
/// observing what gets assigned to it.
#[derive(Debug, Clone)]
pub struct VideoElement {
    id: Arc<str>,
    state: Arc<Mutex<VideoElementState>>,
}

#[derive(Debug, Default)]
struct VideoElementState {
    src_object: Option<MediaStream>,
    assignments: u64,
}

impl VideoElement {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self {
            id: Arc::from(id.as_ref()),
            state: Arc::new(Mutex::new(VideoElementState::default())),
        }
    }

    /// Currently assigned stream
    pub fn src_object(&self) -> Option<MediaStream> {
        self.state.lock().src_object.clone()
    }

    /// How many times a render source was assigned
    pub fn assignment_count(&self) -> u64 {
        self.state.lock().assignments
    }

    /// Whether a live stream is currently rendering
    pub fn is_playing(&self) -> bool {
        self.state.lock().src_object.is_some()
    }
}

impl DisplaySurface for VideoElement {
    type Stream = MediaStream;

    fn surface_id(&self) -> &str {
        &self.id
    }

    fn set_src_object(&self, stream: Option<&MediaStream>) {
        let mut state = self.state.lock();
        debug!(
            surface = %self.id,
            stream = ?stream.map(MediaStream::id),
            "Assigning render source"
        );
        state.src_object = stream.cloned();
        state.assignments += 1;
    }
}
