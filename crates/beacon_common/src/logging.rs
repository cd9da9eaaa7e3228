//! Diagnostic logging
//!
//! tracing output goes to stderr so it never mixes with the report on
//! stdout. Verbosity comes from `RUST_LOG`, quiet (`warn`) by default.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
