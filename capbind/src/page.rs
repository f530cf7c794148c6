//! In-memory page for native hosts

use capbind_media::{SurfaceLookup, VideoElement};
use std::collections::HashMap;

/// Display surfaces keyed by element id
#[derive(Debug, Default, Clone)]
pub struct Page {
    elements: HashMap<String, VideoElement>,
}

impl Page {
    /// Create an empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a video element, replacing any element with the same id
    pub fn add_video_element(&mut self, id: &str) -> VideoElement {
        let element = VideoElement::new(id);
        self.elements.insert(id.to_string(), element.clone());
        element
    }

    /// Remove an element; handles already given out stay usable
    pub fn remove_element(&mut self, id: &str) -> Option<VideoElement> {
        self.elements.remove(id)
    }

    /// Number of elements on the page
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the page has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl SurfaceLookup for Page {
    type Surface = VideoElement;

    fn get_element_by_id(&self, id: &str) -> Option<VideoElement> {
        self.elements.get(id).cloned()
    }
}
