use std::borrow::Cow;

use crate::logging::DEFAULT_FILTER;

/// Configuration for the spritebatch runtime utilities.
#[derive(Debug, Clone)]
pub struct Config {
    /// Filter directives handed to the tracing subscriber.
    ///
    /// Ignored when `RUST_LOG` is set.
    pub log_filter: Cow<'static, str>,
    pub profiling: ProfilingMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: Cow::Borrowed(DEFAULT_FILTER),
            profiling: ProfilingMode::Off,
        }
    }
}

impl Config {
    /// Replace the log filter.
    pub fn with_log_filter(mut self, filter: impl Into<Cow<'static, str>>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Replace the profiling mode.
    pub fn with_profiling(mut self, profiling: ProfilingMode) -> Self {
        self.profiling = profiling;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingMode {
    /// Profiling is disabled
    Off,
    /// Profiling scopes are recorded, and can be inspected in-process
    Scopes,
    /// Profiling scopes are recorded and served to external tools such as 'puffin_viewer'
    #[cfg(feature = "profiling")]
    WithWebserver,
}
