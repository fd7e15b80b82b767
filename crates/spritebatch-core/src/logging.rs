use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor an explicit filter is given.
pub const DEFAULT_FILTER: &str = "info,spritebatch_render=debug,wgpu_core=warn,naga=warn";

pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install a fmt subscriber. `RUST_LOG` takes precedence over `filter`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_with_filter(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("Global subscriber already installed, keeping it");
    }
}
