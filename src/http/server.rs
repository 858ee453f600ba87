//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum Router that sends every path to the fixture handler
//! - Wire up request tracing
//! - Serve a bound listener until its handle is stopped

use axum::{routing::any, Router};
use std::future::IntoFuture;
use std::time::Duration;
use thiserror::Error;
use tower_http::trace::TraceLayer;

use crate::http::handler::fixture_handler;
use crate::lifecycle::{ServerHandle, ServerState};
use crate::net::Listener;

/// Errors from a serve loop that was already listening.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Build the Axum router with the handle injected as state.
pub fn build_router(handle: ServerHandle) -> Router {
    Router::new()
        .route("/", any(fixture_handler))
        .route("/{*path}", any(fixture_handler))
        .with_state(handle)
        .layer(TraceLayer::new_for_http())
}

const DEFAULT_DRAIN_TIMEOUT: Duration = Duration::from_secs(1);

/// HTTP server for one fixture instance.
pub struct FixtureServer {
    router: Router,
    handle: ServerHandle,
    drain_timeout: Duration,
}

impl FixtureServer {
    /// Create a server whose sentinel path stops `handle`.
    pub fn new(handle: ServerHandle) -> Self {
        Self {
            router: build_router(handle.clone()),
            handle,
            drain_timeout: DEFAULT_DRAIN_TIMEOUT,
        }
    }

    /// Bound how long open connections may drain once stop is requested.
    pub fn with_drain_timeout(mut self, drain_timeout: Duration) -> Self {
        self.drain_timeout = drain_timeout;
        self
    }

    /// Handle controlling this server.
    pub fn handle(&self) -> &ServerHandle {
        &self.handle
    }

    /// Serve connections until the handle is stopped.
    ///
    /// In-flight responses are written out before the socket is released.
    /// Connections still open after the drain timeout are abandoned, so a
    /// stalled client cannot keep the server alive.
    pub async fn run(self, listener: Listener) -> Result<(), ServeError> {
        let addr = listener.local_addr();
        let handle = self.handle;
        let drain_timeout = self.drain_timeout;
        handle.set_state(ServerState::Listening);
        tracing::info!(address = %addr, "HTTP server starting");

        let shutdown = {
            let handle = handle.clone();
            async move { handle.stop_requested().await }
        };
        let drain_deadline = {
            let handle = handle.clone();
            async move {
                handle.stop_requested().await;
                tokio::time::sleep(drain_timeout).await;
            }
        };

        let serve = axum::serve(listener.into_inner(), self.router)
            .with_graceful_shutdown(shutdown)
            .into_future();

        let result = tokio::select! {
            result = serve => result,
            _ = drain_deadline => {
                tracing::warn!(
                    address = %addr,
                    drain_timeout_ms = drain_timeout.as_millis() as u64,
                    "Connections still open after drain timeout, stopping anyway"
                );
                Ok(())
            }
        };

        handle.set_state(ServerState::Stopped);
        result?;

        tracing::info!(address = %addr, "HTTP server stopped");
        Ok(())
    }
}
