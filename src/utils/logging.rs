//! Logging bootstrap
//!
//! Structured logging via `tracing`; embedders that already install a
//! subscriber can skip this entirely.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing with the `RUST_LOG` filter, defaulting to `info`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    init_with_filter("info");
}

/// Initialize tracing with an explicit default filter directive.
pub fn init_with_filter(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
