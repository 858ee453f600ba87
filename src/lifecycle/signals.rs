//! OS signal handling.
//!
//! Ctrl+C stops the fixture the same way the sentinel path does.

use crate::lifecycle::ServerHandle;

/// Stop `handle` when Ctrl+C is received.
pub async fn stop_on_ctrl_c(handle: ServerHandle) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => match result {
            Ok(()) => {
                tracing::info!("Shutdown signal received");
                handle.stop();
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            }
        },
        // Already stopping; nothing left to listen for.
        _ = handle.stop_requested() => {}
    }
}
