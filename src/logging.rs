// src/logging.rs
use tracing_subscriber::EnvFilter;

/// Environment variable holding tracing filter directives
pub const LOG_ENV: &str = "LWT_LOG";

/// Diagnostics users should see without configuring anything
pub const DEFAULT_FILTER: &str = "warn";

/// Filter from `LWT_LOG`, or warnings and errors only.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the stderr subscriber. Safe to call more than once.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
