//! Diagnostic channel for capture failures

use crate::error::MediaError;
use std::rc::Rc;
use std::sync::Arc;

/// Prefix used for every capture failure report
pub const WEBCAM_ERROR_MESSAGE: &str = "Error accessing webcam: ";

/// Receives a free-text message plus the error on failure
pub trait DiagnosticSink {
    fn report(&self, message: &str, error: &MediaError);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Rc<T> {
    fn report(&self, message: &str, error: &MediaError) {
        (**self).report(message, error)
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Arc<T> {
    fn report(&self, message: &str, error: &MediaError) {
        (**self).report(message, error)
    }
}

/// Emits one `tracing` error event per report
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, message: &str, error: &MediaError) {
        tracing::error!(category = %error.category(), "{}{}", message, error);
    }
}

/// Writes reports to the browser console as `console.error(message, error)`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

#[cfg(target_arch = "wasm32")]
impl DiagnosticSink for ConsoleSink {
    fn report(&self, message: &str, error: &MediaError) {
        use wasm_bindgen::JsValue;

        web_sys::console::error_2(
            &JsValue::from_str(message),
            &JsValue::from_str(&error.to_string()),
        );
    }
}
