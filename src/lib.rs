//! Controllable HTTP response fixture for client test suites.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::schema::FixtureConfig;
pub use http::FixtureServer;
pub use lifecycle::{serve, start, RunningServer, ServerHandle, ServerState};
