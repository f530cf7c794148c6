pub mod mock;
#[cfg(all(feature = "native-camera", not(target_arch = "wasm32")))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use mock::{MockDeviceAccess, MockOutcome};
#[cfg(all(feature = "native-camera", not(target_arch = "wasm32")))]
pub use native::NokhwaDeviceAccess;
#[cfg(target_arch = "wasm32")]
pub use web::{HtmlVideoSurface, WebDeviceAccess, WebDocument};
