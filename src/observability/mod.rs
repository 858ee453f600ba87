//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handler / listener / lifecycle events
//!     → tracing macros with structured fields
//!     → logging.rs (registry + EnvFilter + fmt layer)
//!     → stdout
//! ```

pub mod logging;

pub use logging::init_logging;
