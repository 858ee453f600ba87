//! The fixture's single request handler.
//!
//! Every path and method lands here. The sentinel path acknowledges and
//! schedules a stop; everything else is echoed back from the query string.

use axum::{
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
};

use crate::http::request::RequestIntent;
use crate::http::response::shutdown_ack;
use crate::lifecycle::ServerHandle;

/// Map one request to its response, or to a shutdown.
pub async fn fixture_handler(
    State(handle): State<ServerHandle>,
    method: Method,
    uri: Uri,
) -> Response {
    let intent = RequestIntent::new(method, &uri);

    if intent.is_shutdown() {
        tracing::info!(method = %intent.method, "Shutting down");
        // Stop on a separate task; the acknowledgement is returned and
        // written before graceful shutdown closes the connection.
        tokio::spawn(async move { handle.stop() });
        return shutdown_ack();
    }

    match intent.echo_reply() {
        Ok(reply) => {
            tracing::debug!(
                method = %intent.method,
                path = %intent.path,
                status = reply.status.as_u16(),
                "Echoing"
            );
            reply.into_response()
        }
        Err(err) => {
            tracing::warn!(
                method = %intent.method,
                path = %intent.path,
                error = %err,
                "Rejecting request"
            );
            err.into_response()
        }
    }
}
