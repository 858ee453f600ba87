//! Configuration schema definitions.
//!
//! All types derive Serde traits so an embedding harness can describe the
//! fixture in TOML. Every field has a default; the binary runs on defaults.

use serde::{Deserialize, Serialize};

/// Port the client-side test suites expect the fixture on.
///
/// This is a contract shared with the callers, not a tunable.
pub const DEFAULT_PORT: u16 = 9999;

/// Root configuration for the response fixture.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct FixtureConfig {
    /// Listener configuration (bind address, backlog).
    pub listener: ListenerConfig,

    /// Logging settings.
    pub logging: LoggingConfig,
}

impl FixtureConfig {
    /// Default configuration bound to `127.0.0.1:{port}`.
    ///
    /// Port `0` asks the OS for a free port.
    pub fn localhost(port: u16) -> Self {
        Self {
            listener: ListenerConfig {
                bind_address: format!("127.0.0.1:{}", port),
                ..ListenerConfig::default()
            },
            ..Self::default()
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:9999").
    pub bind_address: String,

    /// Pending connection queue length passed to `listen(2)`.
    pub backlog: u32,

    /// How long open connections may drain after a stop before the server
    /// is torn down regardless.
    pub drain_timeout_ms: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("0.0.0.0:{}", DEFAULT_PORT),
            backlog: 128,
            drain_timeout_ms: 1_000,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "response_fixture=info,tower_http=info".to_string(),
        }
    }
}
