//! Spritebatch Core
//!
//! Shared utilities for the spritebatch engine: logging and profiling setup,
//! math re-exports, geometry and color value types.

pub mod color;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;

pub use color::Color;
pub use config::{Config, ProfilingMode};

/// Install logging and, when requested, profiling according to `config`.
pub fn init(config: &Config) {
    logging::init_with_filter(&config.log_filter);

    match config.profiling {
        ProfilingMode::Off => {}
        ProfilingMode::Scopes => profiling::enable_scopes(),
        #[cfg(feature = "profiling")]
        ProfilingMode::WithWebserver => {
            profiling::init_profiling(profiling::ProfilingBackend::PuffinHttp)
        }
    }
}
