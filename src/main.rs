//! HTTP response fixture.
//!
//! Serves on the port shared with the client test suites and answers every
//! request with the status and body named in its query string:
//!
//! ```text
//! GET /anything?status=404&text=not%20found   → 404 "not found"
//! DELETE /x?text=bye                          → 200 "bye"
//! GET /                                       → 200 "Please provide a "text" query param"
//! <any> /shutdown                             → 200 "", then the server stops
//! ```
//!
//! Takes no flags; a bind failure exits non-zero.

use response_fixture::config::{validate_config, FixtureConfig};
use response_fixture::observability::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = FixtureConfig::default();
    init_logging(&config.logging);

    tracing::info!("response-fixture v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(errors) = validate_config(&config) {
        for error in &errors {
            tracing::error!(%error, "Invalid configuration");
        }
        return Err("invalid configuration".into());
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        backlog = config.listener.backlog,
        "Configuration loaded"
    );

    response_fixture::serve(&config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
