//! Browser entry point

use crate::app::CaptureApp;
use crate::config::BinderConfig;
use capbind_media::{ConsoleSink, WasmSpawner, WebDeviceAccess, WebDocument};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Bind the camera to `#webcam` as soon as the module loads
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let app = CaptureApp::new(BinderConfig::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let document = WebDocument::current().map_err(|e| JsValue::from_str(&e.to_string()))?;

    // Detached: the outcome is reported through the console.
    let _handle = app.on_load(
        &document,
        Rc::new(WebDeviceAccess),
        Rc::new(WasmSpawner),
        Rc::new(ConsoleSink),
    );
    Ok(())
}
