//! Response rendering.
//!
//! Echo replies carry no `Content-Type`; hyper supplies `Content-Length`.
//! Request errors become client-visible error responses so a bad request
//! never takes the listener down.

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::http::request::{EchoReply, RequestError};

impl IntoResponse for EchoReply {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.text));
        *response.status_mut() = self.status;
        response
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = match self {
            RequestError::InvalidStatus { .. } => StatusCode::BAD_REQUEST,
            RequestError::UnsupportedMethod(_) => StatusCode::NOT_IMPLEMENTED,
        };
        (status, self.to_string()).into_response()
    }
}

/// `200 OK` with an empty body, sent for the shutdown sentinel.
pub fn shutdown_ack() -> Response {
    Response::new(Body::empty())
}
