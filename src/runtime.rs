//! Async runtime management for FFI
//!
//! C callers are synchronous, so the C ABI drives the async client on a
//! process-wide current-thread runtime. Only one request runs at a time.

use std::future::Future;
use std::sync::Mutex;

use tokio::runtime::{Builder, Runtime};

use crate::error::{Error, Result};

lazy_static::lazy_static! {
    /// Global Tokio runtime for async operations
    static ref RUNTIME: Mutex<Option<Runtime>> = Mutex::new(None);
}

/// Serializes tests that start or stop the global runtime
#[cfg(test)]
pub(crate) static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Initialize the async runtime
///
/// Safe to call multiple times - subsequent calls are no-ops.
pub fn init_runtime() -> Result<()> {
    let mut runtime_guard = RUNTIME
        .lock()
        .map_err(|_| Error::invalid_state("Failed to acquire runtime lock"))?;

    if runtime_guard.is_none() {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::invalid_state(format!("Failed to create Tokio runtime: {e}")))?;
        *runtime_guard = Some(runtime);
        tracing::info!("runtime started");
    }

    Ok(())
}

/// Shutdown the async runtime
///
/// No async operation can run until `init_runtime` is called again.
pub fn shutdown_runtime() {
    if let Ok(mut runtime_guard) = RUNTIME.lock() {
        if let Some(runtime) = runtime_guard.take() {
            runtime.shutdown_timeout(std::time::Duration::from_secs(5));
            tracing::info!("runtime stopped");
        }
    }
}

/// Whether `init_runtime` has been called without a matching shutdown
pub fn is_running() -> bool {
    RUNTIME.lock().map(|guard| guard.is_some()).unwrap_or(false)
}

/// Run a future to completion on the global runtime
///
/// Blocks the calling thread. Concurrent callers wait their turn.
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime_guard = RUNTIME
        .lock()
        .map_err(|_| Error::invalid_state("Failed to acquire runtime lock"))?;
    let runtime = runtime_guard
        .as_ref()
        .ok_or_else(|| Error::invalid_state("Runtime not initialized"))?;
    Ok(runtime.block_on(future))
}
