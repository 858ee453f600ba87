//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Bind listener → Mark Listening → Serve
//!
//! Shutdown (shutdown.rs):
//!     /shutdown or Ctrl+C → stop() → Stop accepting → Finish in-flight → Stopped
//!
//! States:
//!     Stopped → Listening → Stopped
//! ```
//!
//! # Design Decisions
//! - Bind failures are fatal and reported before serving starts
//! - The handle is passed to the handler explicitly, never stored globally
//! - A stopped instance is not restarted; `start` builds a new one

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{ServerHandle, ServerState};
pub use startup::{serve, start, RunningServer};
