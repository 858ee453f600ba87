//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (binary) or TOML text (embedding harness)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → FixtureConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; the binary takes no flags
//! - The default port is a contract with the client test suites

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{FixtureConfig, ListenerConfig, LoggingConfig, DEFAULT_PORT};
pub use validation::{validate_config, ValidationError};
