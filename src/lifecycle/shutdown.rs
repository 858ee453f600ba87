//! Shutdown coordination for a fixture instance.

use std::sync::Arc;
use tokio::sync::watch;

/// Lifecycle state of one server instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Not accepting connections (initial and terminal state).
    Stopped,
    /// Bound and accepting connections.
    Listening,
}

/// Handle to a single running (or about to run) server instance.
///
/// Cloned into the request handler so the sentinel path can stop the very
/// server it is served by. Each instance gets its own handle; a restart
/// builds a fresh one.
#[derive(Debug, Clone)]
pub struct ServerHandle {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    stop: watch::Sender<bool>,
    state: watch::Sender<ServerState>,
}

impl ServerHandle {
    /// Create a handle for a new, stopped instance.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                stop: watch::Sender::new(false),
                state: watch::Sender::new(ServerState::Stopped),
            }),
        }
    }

    /// Ask the serve loop to exit once in-flight responses are written.
    ///
    /// Never blocks and may be called any number of times from any task or
    /// thread.
    pub fn stop(&self) {
        let already = self.inner.stop.send_replace(true);
        if !already {
            tracing::debug!("Stop requested");
        }
    }

    /// Whether `stop` has been called.
    pub fn is_stop_requested(&self) -> bool {
        *self.inner.stop.borrow()
    }

    /// Resolve once `stop` has been called.
    pub async fn stop_requested(&self) {
        let mut rx = self.inner.stop.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        let _ = rx.wait_for(|stop| *stop).await;
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ServerState {
        *self.inner.state.borrow()
    }

    pub(crate) fn set_state(&self, state: ServerState) {
        let previous = self.inner.state.send_replace(state);
        if previous != state {
            tracing::debug!(from = ?previous, to = ?state, "Server state changed");
        }
    }
}

impl Default for ServerHandle {
    fn default() -> Self {
        Self::new()
    }
}
