//! Profiling utilities based on the `puffin` crate.

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

#[cfg(feature = "profiling")]
use std::sync::OnceLock;

/// Profiling backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingBackend {
    /// Send profiling data to puffin_viewer via HTTP.
    PuffinHttp,
}

/// Global profiling server instance.
#[cfg(feature = "profiling")]
static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

/// Turn on scope recording without starting a server.
pub fn enable_scopes() {
    puffin::set_scopes_on(true);
}

/// Initialize profiling with the specified backend.
///
/// # Example
/// ```no_run
/// use spritebatch_core::profiling::{init_profiling, ProfilingBackend};
///
/// init_profiling(ProfilingBackend::PuffinHttp);
/// ```
#[cfg(feature = "profiling")]
pub fn init_profiling(backend: ProfilingBackend) {
    match backend {
        ProfilingBackend::PuffinHttp => {
            enable_scopes();

            // Start the puffin server on the default port (8585)
            match puffin_http::Server::new("0.0.0.0:8585") {
                Ok(server) => {
                    tracing::info!("Puffin profiler server started on http://0.0.0.0:8585");

                    // Keep the server alive for the rest of the process
                    let _ = PROFILING_SERVER.set(server);
                }
                Err(e) => {
                    tracing::error!("Failed to start puffin server: {}", e);
                }
            }
        }
    }
}

/// Mark the start of a new frame for profiling.
///
/// Call this once per frame, typically after the last `SpriteBatch::end`.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
