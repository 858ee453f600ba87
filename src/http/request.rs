//! Request interpretation.
//!
//! # Responsibilities
//! - Parse the query string into ordered multi-valued parameters
//! - Derive the per-request intent (method, path, query)
//! - Extract the echo reply (`status`, `text`) with their defaults
//!
//! Unknown parameters are ignored; known ones are read from their first
//! occurrence.

use axum::http::{Method, StatusCode, Uri};
use std::collections::HashMap;
use thiserror::Error;

/// Path that stops the fixture instead of echoing.
pub const SHUTDOWN_PATH: &str = "/shutdown";

/// Body sent when the request has no `text` parameter.
pub const DEFAULT_TEXT: &str = "Please provide a \"text\" query param";

/// Query parameter holding the response status code.
pub const STATUS_PARAM: &str = "status";

/// Query parameter holding the response body.
pub const TEXT_PARAM: &str = "text";

/// Errors raised while interpreting a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// `status` was not an integer HTTP status code.
    #[error("Invalid status {value:?}: expected an integer between 100 and 999")]
    InvalidStatus { value: String },

    /// Method is not one the fixture echoes for.
    #[error("Unsupported method ('{0}')")]
    UnsupportedMethod(Method),
}

/// Decoded query parameters, each key mapped to its values in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: HashMap<String, Vec<String>>,
}

impl QueryParams {
    /// Parse an `application/x-www-form-urlencoded` query string.
    ///
    /// `+` decodes to a space and `%XX` escapes are resolved. Blank values are
    /// kept, so `text=` is an empty string rather than absent.
    pub fn parse(query: &str) -> Self {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            values
                .entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }
        Self { values }
    }

    /// First value for `key`, if present.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

}

/// What one inbound request asks the fixture to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestIntent {
    pub method: Method,
    pub path: String,
    pub query: QueryParams,
}

impl RequestIntent {
    pub fn new(method: Method, uri: &Uri) -> Self {
        Self {
            method,
            path: uri.path().to_string(),
            query: uri.query().map(QueryParams::parse).unwrap_or_default(),
        }
    }

    /// Whether this request targets the shutdown sentinel.
    ///
    /// Matches on the path alone; method and query are irrelevant.
    pub fn is_shutdown(&self) -> bool {
        self.path == SHUTDOWN_PATH
    }

    /// Status and body requested through the query string.
    pub fn echo_reply(&self) -> Result<EchoReply, RequestError> {
        if !is_echo_method(&self.method) {
            return Err(RequestError::UnsupportedMethod(self.method.clone()));
        }

        // A blank `status=` counts as absent; only `text` keeps blank values.
        let status = match self.query.first(STATUS_PARAM).filter(|value| !value.is_empty()) {
            Some(value) => parse_status(value)?,
            None => StatusCode::OK,
        };
        let text = self
            .query
            .first(TEXT_PARAM)
            .unwrap_or(DEFAULT_TEXT)
            .to_string();

        Ok(EchoReply { status, text })
    }
}

/// Response contents taken verbatim from the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoReply {
    pub status: StatusCode,
    pub text: String,
}

fn is_echo_method(method: &Method) -> bool {
    [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
    ]
    .contains(method)
}

fn parse_status(value: &str) -> Result<StatusCode, RequestError> {
    let invalid = || RequestError::InvalidStatus {
        value: value.to_string(),
    };
    let code: u16 = value.trim().parse().map_err(|_| invalid())?;
    StatusCode::from_u16(code).map_err(|_| invalid())
}
