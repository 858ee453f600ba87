//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::FixtureConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<FixtureConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<FixtureConfig, ConfigError> {
    let config: FixtureConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, FixtureConfig::default());
    }

    #[test]
    fn partial_listener_section_keeps_other_defaults() {
        let config = parse_config(
            r#"
            [listener]
            bind_address = "127.0.0.1:18080"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:18080");
        assert_eq!(config.listener.backlog, 128);
    }

    #[test]
    fn rejects_semantically_invalid_config() {
        let err = parse_config("[listener]\nbacklog = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref e) if e == &[ValidationError::ZeroBacklog]));
        assert_eq!(
            err.to_string(),
            "Validation failed: listener.backlog must be greater than zero"
        );
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(parse_config("[listener"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/response-fixture.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
