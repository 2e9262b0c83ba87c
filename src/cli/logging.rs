//! Log output for the binary.

use tracing_subscriber::EnvFilter;

use super::Verbosity;

/// Install a stderr fmt subscriber. `RUST_LOG` takes precedence over `verbosity`.
pub fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.default_filter()));

    // A subscriber installed earlier (e.g. by a test harness) stays in place.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
