//! Structured logging.
//!
//! `RUST_LOG` wins when set; otherwise the configured filter applies.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Build the filter for `config`, preferring `RUST_LOG`.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// Install the global subscriber. Call once, at process start.
pub fn init_logging(config: &LoggingConfig) {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
