//! Browser capture through `navigator.mediaDevices.getUserMedia`

use crate::constraints::MediaStreamConstraints;
use crate::device::DeviceAccess;
use crate::error::{AccessFailureCause, MediaError, MediaResult};
use crate::surface::{DisplaySurface, SurfaceLookup};
use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use tracing::warn;
use web_sys::{DomException, HtmlVideoElement};

/// `MediaDevices.getUserMedia()` adapter
#[derive(Debug, Default, Clone, Copy)]
pub struct WebDeviceAccess;

#[async_trait(?Send)]
impl DeviceAccess for WebDeviceAccess {
    type Stream = web_sys::MediaStream;

    fn backend_name(&self) -> &str {
        "getUserMedia"
    }

    async fn request(
        &self,
        constraints: &MediaStreamConstraints,
    ) -> MediaResult<web_sys::MediaStream> {
        let window = web_sys::window().ok_or_else(|| MediaError::UnsupportedPlatform {
            platform: "no window object".to_string(),
        })?;
        let media_devices = window.navigator().media_devices().map_err(access_error)?;

        let js_constraints = web_sys::MediaStreamConstraints::new();
        js_constraints.set_video(&JsValue::from_bool(constraints.video));
        js_constraints.set_audio(&JsValue::from_bool(constraints.audio));

        let promise = media_devices
            .get_user_media_with_constraints(&js_constraints)
            .map_err(access_error)?;
        let stream = JsFuture::from(promise).await.map_err(access_error)?;

        stream
            .dyn_into::<web_sys::MediaStream>()
            .map_err(|_| MediaError::Backend {
                backend: "getUserMedia".to_string(),
                message: "Promise resolved to a non-MediaStream value".to_string(),
            })
    }
}

fn access_error(value: JsValue) -> MediaError {
    match value.dyn_ref::<DomException>() {
        Some(exception) => MediaError::device_access(
            AccessFailureCause::from_dom_name(&exception.name()),
            format!("{}: {}", exception.name(), exception.message()),
        ),
        None => MediaError::device_access(AccessFailureCause::Unknown, format!("{:?}", value)),
    }
}

/// An `<video>` element in the current document
#[derive(Debug, Clone)]
pub struct HtmlVideoSurface {
    id: String,
    element: HtmlVideoElement,
}

impl DisplaySurface for HtmlVideoSurface {
    type Stream = web_sys::MediaStream;

    fn surface_id(&self) -> &str {
        &self.id
    }

    fn set_src_object(&self, stream: Option<&web_sys::MediaStream>) {
        self.element.set_src_object(stream);
    }
}

/// Surface lookup over a DOM document
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    /// Document of the current window
    pub fn current() -> MediaResult<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(|document| Self { document })
            .ok_or_else(|| MediaError::UnsupportedPlatform {
                platform: "no document".to_string(),
            })
    }
}

impl SurfaceLookup for WebDocument {
    type Surface = HtmlVideoSurface;

    /// Find the `<video>` element with `id`
    ///
    /// An element with that id which is not a `<video>` counts as absent, so a
    /// granted stream ends in a `SurfaceNotFound` report instead of being set
    /// as a `srcObject` property nothing would render.
    fn get_element_by_id(&self, id: &str) -> Option<HtmlVideoSurface> {
        let element = self.document.get_element_by_id(id)?;
        match element.dyn_into::<HtmlVideoElement>() {
            Ok(element) => Some(HtmlVideoSurface {
                id: id.to_string(),
                element,
            }),
            Err(element) => {
                warn!(
                    surface = id,
                    tag = %element.tag_name(),
                    "Element is not a <video>, treating it as absent"
                );
                None
            }
        }
    }
}
