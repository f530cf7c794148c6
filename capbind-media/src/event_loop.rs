//! Single-threaded cooperative task queue
//!
//! Capture requests are spawned here and resolve on the same thread that
//! issued them. Spawning never polls the task, so the caller regains control
//! before the request makes any progress.

use std::future::Future;
use std::pin::Pin;

/// A `!Send` task queued on the current thread
pub type LocalTask = Pin<Box<dyn Future<Output = ()> + 'static>>;

/// Queues tasks on a single-threaded executor
pub trait LocalSpawner {
    fn spawn_local(&self, task: LocalTask);
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{CurrentLocalSet, EventLoop};

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::{LocalSpawner, LocalTask};
    use crate::error::{MediaError, MediaResult};
    use std::future::Future;
    use tokio::runtime::{Builder, Runtime};
    use tokio::task::LocalSet;
    use tracing::debug;

    /// Owned current-thread runtime plus its local task set
    #[derive(Debug)]
    pub struct EventLoop {
        runtime: Runtime,
        local: LocalSet,
    }

    impl EventLoop {
        /// Create a new event loop
        pub fn new() -> MediaResult<Self> {
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|e| MediaError::Backend {
                    backend: "tokio".to_string(),
                    message: format!("Failed to create event loop: {}", e),
                })?;

            debug!("Event loop created");
            Ok(Self {
                runtime,
                local: LocalSet::new(),
            })
        }

        /// Drive queued tasks until `future` completes
        pub fn block_on<F: Future>(&self, future: F) -> F::Output {
            self.local.block_on(&self.runtime, future)
        }
    }

    impl LocalSpawner for EventLoop {
        fn spawn_local(&self, task: LocalTask) {
            // Detached; the task owns everything it reports through.
            drop(self.local.spawn_local(task));
        }
    }

    /// Spawns onto whichever `LocalSet` is running the caller
    ///
    /// Panics if used outside of a `LocalSet` context, like
    /// [`tokio::task::spawn_local`].
    #[derive(Debug, Default, Clone, Copy)]
    pub struct CurrentLocalSet;

    impl LocalSpawner for CurrentLocalSet {
        fn spawn_local(&self, task: LocalTask) {
            drop(tokio::task::spawn_local(task));
        }
    }
}

/// Spawns through `wasm_bindgen_futures` onto the browser microtask queue
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct WasmSpawner;

#[cfg(target_arch = "wasm32")]
impl LocalSpawner for WasmSpawner {
    fn spawn_local(&self, task: LocalTask) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
