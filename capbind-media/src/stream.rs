//! Stream handle for native hosts

use crate::constraints::TrackKind;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Opaque handle to a live capture session
///
/// Clones share the same session. Whatever keeps the device open is held in
/// a release guard that is dropped together with the last clone.
#[derive(Clone)]
pub struct MediaStream {
    inner: Arc<StreamInner>,
}

struct StreamInner {
    id: Uuid,
    label: String,
    tracks: Vec<TrackKind>,
    _release_guard: Option<Box<dyn Any + Send + Sync>>,
}

impl MediaStream {
    /// Create a stream handle with no backing resource
    pub fn new(label: impl Into<String>, tracks: Vec<TrackKind>) -> Self {
        Self::build(label.into(), tracks, None)
    }

    /// Create a stream handle that owns `guard` until the last clone drops
    pub fn with_release_guard<G>(label: impl Into<String>, tracks: Vec<TrackKind>, guard: G) -> Self
    where
        G: Any + Send + Sync,
    {
        Self::build(label.into(), tracks, Some(Box::new(guard)))
    }

    fn build(
        label: String,
        tracks: Vec<TrackKind>,
        guard: Option<Box<dyn Any + Send + Sync>>,
    ) -> Self {
        Self {
            inner: Arc::new(StreamInner {
                id: Uuid::new_v4(),
                label,
                tracks,
                _release_guard: guard,
            }),
        }
    }

    /// Unique stream id
    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Human readable device label
    pub fn label(&self) -> &str {
        &self.inner.label
    }

    /// Track kinds carried by the stream
    pub fn tracks(&self) -> &[TrackKind] {
        &self.inner.tracks
    }

    pub fn has_video(&self) -> bool {
        self.inner.tracks.contains(&TrackKind::Video)
    }

    /// Whether both handles refer to the same capture session
    pub fn same_session(&self, other: &MediaStream) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for MediaStream {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for MediaStream {}

impl fmt::Debug for MediaStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaStream")
            .field("id", &self.inner.id)
            .field("label", &self.inner.label)
            .field("tracks", &self.inner.tracks)
            .finish()
    }
}
