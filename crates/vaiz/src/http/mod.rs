//! HTTP layer
//!
//! The [`BaseClient`] turns `(endpoint, body)` into one POST through an
//! injectable [`Transport`]. Transport types are re-exported so callers can
//! implement their own without depending on `vaiz-transport` directly.

pub use base::{APP_VERSION_HEADER, BaseClient, DEFAULT_APP_VERSION, SPACE_ID_HEADER};
pub use vaiz_transport::{
    HttpRequest, HttpResponse, HttpTransport, HttpTransportConfig, Transport, TransportError,
};

mod base;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue};
