//! Transport abstraction layer for the Vaiz SDK
//!
//! Every Vaiz API call is a single HTTP exchange. This crate isolates that
//! exchange behind the [`Transport`] trait so the SDK can run against the
//! real network ([`HttpTransport`], backed by `reqwest`) or against any
//! injected implementation (test doubles, recording proxies, custom stacks).
//!
//! # Architecture
//!
//! - **Transport trait**: one async operation, `send_http`
//! - **HTTP transport**: `reqwest` client with per-request timeouts
//! - **Error handling**: [`TransportError`] separates "could not reach the
//!   server" from anything the server said
//!
//! # Usage
//!
//! ```no_run
//! use vaiz_transport::{HttpRequest, HttpTransport, Transport};
//!
//! # async fn example() -> vaiz_transport::Result<()> {
//! let transport = HttpTransport::new()?;
//! let request = HttpRequest::post("https://api.vaiz.com/v4/getBoards").with_body(b"{}".to_vec());
//! let response = transport.send_http(request).await?;
//! println!("status {}", response.status);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod http;
pub mod traits;

// Re-export commonly used types
pub use error::{Result, TransportError};
pub use http::{HttpTransport, HttpTransportConfig};
pub use traits::{HttpRequest, HttpResponse, Transport};
