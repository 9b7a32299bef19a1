//! Logging bootstrap for embedding services
//!
//! Priority: RUST_LOG env var > configured level > default "info"

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogConfig;

/// Initialize the global tracing subscriber.
/// This function is idempotent - calling it multiple times is safe.
pub fn init(config: &LogConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let _ = fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .try_init();
}
