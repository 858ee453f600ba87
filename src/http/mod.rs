//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, graceful shutdown)
//!     → handler.rs (sentinel check or echo)
//!     → request.rs (query parsing, status/text extraction)
//!     → response.rs (echo body, error responses)
//!     → Send to client
//! ```

pub mod handler;
pub mod request;
pub mod response;
pub mod server;

pub use request::{EchoReply, QueryParams, RequestError, RequestIntent, DEFAULT_TEXT, SHUTDOWN_PATH};
pub use server::{build_router, FixtureServer, ServeError};
