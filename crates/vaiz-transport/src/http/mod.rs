//! HTTP transport implementation
//!
//! Provides a `reqwest`-backed client that implements the Transport trait.

pub mod client;

pub use client::{HttpTransport, HttpTransportConfig};
