//! Logging setup for the tour binary and demos.

use crate::config::TourConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Builds the filter from `RUST_LOG` when set, else from the config.
pub fn env_filter(config: &TourConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global `tracing` subscriber. Later calls are ignored.
pub fn init_logging(config: &TourConfig) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(false)
        .with_ansi(config.color)
        .try_init()
        .is_ok();

    if installed {
        debug!(level = %config.log_level, "logging initialized");
    }
}
