//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig
//!     → listener.rs (socket2 socket, SO_REUSEADDR, bind, listen)
//!     → tokio TcpListener
//!     → Hand off to HTTP layer
//! ```

pub mod listener;

pub use listener::{Listener, ListenerError};
