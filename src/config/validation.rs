//! Configuration validation.
//!
//! Serde handles the syntactic side; this checks values that deserialize
//! fine but cannot be used to start a listener. All problems are reported,
//! not just the first.

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::FixtureConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    InvalidBindAddress(String),

    #[error("listener.backlog must be greater than zero")]
    ZeroBacklog,

    #[error("logging.filter must not be empty")]
    EmptyLogFilter,
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &FixtureConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.listener.backlog == 0 {
        errors.push(ValidationError::ZeroBacklog);
    }

    if config.logging.filter.trim().is_empty() {
        errors.push(ValidationError::EmptyLogFilter);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
