//! Startup orchestration.
//!
//! Binding happens before anything is spawned, so a port conflict surfaces
//! as an error from `start`/`serve` rather than from a background task.

use std::net::SocketAddr;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::config::FixtureConfig;
use crate::http::server::{FixtureServer, ServeError};
use crate::lifecycle::signals::stop_on_ctrl_c;
use crate::lifecycle::{ServerHandle, ServerState};
use crate::net::{Listener, ListenerError};

/// A fixture instance serving on a background task.
#[derive(Debug)]
pub struct RunningServer {
    local_addr: SocketAddr,
    handle: ServerHandle,
    task: JoinHandle<Result<(), ServeError>>,
}

impl RunningServer {
    /// Address the instance is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn handle(&self) -> &ServerHandle {
        &self.handle
    }

    /// Request a stop; see [`ServerHandle::stop`].
    pub fn stop(&self) {
        self.handle.stop();
    }

    /// Wait for the serve loop to finish and the port to be released.
    pub async fn wait(self) -> Result<(), ServeError> {
        self.task.await?
    }
}

/// Bind and start serving in the background.
///
/// Each call creates a fresh instance with its own handle.
pub async fn start(config: &FixtureConfig) -> Result<RunningServer, ListenerError> {
    let listener = Listener::bind(&config.listener).await?;
    let local_addr = listener.local_addr();

    let handle = ServerHandle::new();
    handle.set_state(ServerState::Listening);

    let server = FixtureServer::new(handle.clone()).with_drain_timeout(drain_timeout(config));
    let task = tokio::spawn(server.run(listener));

    Ok(RunningServer {
        local_addr,
        handle,
        task,
    })
}

/// Bind and serve until stopped by the sentinel path or Ctrl+C.
pub async fn serve(config: &FixtureConfig) -> Result<(), Box<dyn std::error::Error>> {
    let listener = Listener::bind(&config.listener).await?;
    let server = FixtureServer::new(ServerHandle::new()).with_drain_timeout(drain_timeout(config));

    tokio::spawn(stop_on_ctrl_c(server.handle().clone()));
    server.run(listener).await?;
    Ok(())
}

fn drain_timeout(config: &FixtureConfig) -> Duration {
    Duration::from_millis(config.listener.drain_timeout_ms)
}
