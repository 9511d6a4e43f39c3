//! Transport error types

use std::time::Duration;
use thiserror::Error;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors raised while moving bytes to and from the server.
///
/// None of these variants carry a server verdict: a response that arrived,
/// whatever its status, is an `Ok(HttpResponse)`.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Could not establish a connection (DNS, refused, reset, TLS handshake).
    #[error("Connection error: {0}")]
    Connection(String),

    /// The request did not complete within the configured duration.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The exchange failed after the connection was made (malformed
    /// response, body read failure, invalid request URL).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    /// Failure reported by a custom transport implementation.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Whether this error is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}
