//! Logging initialization

use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// Respects `RUST_LOG` when set, otherwise defaults to info-level output for
/// the client crates. Safe to call more than once; later calls are no-ops.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("client=info,shared=info,warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init();
}
