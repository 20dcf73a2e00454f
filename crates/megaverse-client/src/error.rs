//! Remote client error types.

use std::time::Duration;

use thiserror::Error;

/// Failure to complete a single HTTP exchange with the service.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),

    #[error("connection failed: {0}")]
    Connect(#[source] std::io::Error),

    #[error("tls error: {0}")]
    Tls(String),

    #[error("http error: {0}")]
    Http(#[from] hyper::Error),

    #[error("invalid request: {0}")]
    Request(#[from] http::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

/// Failure to retrieve the goal grid. Fatal for the whole run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("goal endpoint unreachable: {0}")]
    Transport(#[from] TransportError),

    #[error("goal endpoint returned status {0}")]
    Status(u16),

    #[error("malformed goal response: {0}")]
    MalformedResponse(String),
}
