//! Diagnostic output for the binary
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary so embedding applications keep control of their logging.

use tracing_subscriber::EnvFilter;

use crate::constants::logging::{DEFAULT_FILTER, FILTER_ENV};

/// Install a stderr subscriber filtered by `DOTWEAVE_LOG` (default `warn`).
/// Does nothing if a global subscriber is already set.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
