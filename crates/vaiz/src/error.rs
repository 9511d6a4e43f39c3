//! Error types for the Vaiz SDK
//!
//! Every failure surfaced by the client falls into one of four families a
//! caller can tell apart:
//!
//! - [`Error::Configuration`]: the client could not be constructed
//! - [`Error::Transport`]: the server could not be reached (or timed out)
//! - [`Error::Api`]: the server answered and said no
//! - [`Error::Schema`]: the server answered with a shape this client does not understand
//!
//! The client never retries, never logs-and-continues and never substitutes a
//! default value for a failed call.

use thiserror::Error;

pub use vaiz_transport::TransportError;

/// Result type alias for operations that can fail with a Vaiz SDK error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Vaiz SDK.
#[derive(Debug, Error)]
pub enum Error {
    /// Required configuration is missing or invalid. Raised at construction.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network unreachable, connection reset or timeout.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server returned an error envelope or a non-success status.
    #[error("API error {code} (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        /// Remote error code, or `HTTP_<status>` when the body carried none
        code: String,
        /// Optional human-readable message from the server
        message: Option<String>,
        /// HTTP status code of the response
        status: u16,
    },

    /// The response body did not match the expected envelope or payload shape.
    #[error("Response schema mismatch: {0}")]
    Schema(String),

    /// The request body could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A client-side argument was out of bounds.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    /// Build an [`Error::Api`].
    pub fn api(code: impl Into<String>, message: Option<String>, status: u16) -> Self {
        Error::Api {
            code: code.into(),
            message,
            status,
        }
    }

    /// The server rejected the request.
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// The server could not be reached.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// The request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }

    /// The response did not have the expected shape.
    pub fn is_schema(&self) -> bool {
        matches!(self, Error::Schema(_))
    }

    /// Remote error code, if this is an [`Error::Api`].
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Error::Api { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    /// HTTP status, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
