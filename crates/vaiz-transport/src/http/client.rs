//! HTTP transport client implementation
//!
//! Implements the Transport trait on top of `reqwest`. One call is one
//! exchange: there is no retry loop here.

use crate::error::{Result, TransportError};
use crate::traits::{HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::time::Duration;
use tracing::trace;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP transport implementation
///
/// Handles:
/// - Connection pooling (shared across clones)
/// - Per-request timeouts
/// - TLS via rustls
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: ReqwestClient,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a new HTTP transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpTransportConfig::default())
    }

    /// Create a new HTTP transport with custom configuration
    pub fn with_config(config: HttpTransportConfig) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout.min(config.timeout))
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .danger_accept_invalid_certs(!config.verify_ssl)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    /// Default timeout applied to requests that do not carry their own
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_http(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
            timeout,
        } = request;
        let timeout = timeout.unwrap_or(self.timeout);

        trace!(%method, %url, ?timeout, "dispatching request");

        let mut req = self
            .client
            .request(method, url.as_str())
            .headers(headers)
            .timeout(timeout);

        if let Some(body) = body {
            req = req.body(body);
        }

        let response = req.send().await.map_err(|e| classify(e, timeout))?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| classify(e, timeout))?
            .to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

fn classify(err: reqwest::Error, timeout: Duration) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(timeout)
    } else if err.is_connect() {
        TransportError::Connection(err.to_string())
    } else {
        TransportError::Http(err.to_string())
    }
}

/// HTTP transport configuration
#[derive(Clone, Debug)]
pub struct HttpTransportConfig {
    /// Request timeout
    pub timeout: Duration,

    /// Connection timeout (capped at `timeout`)
    pub connect_timeout: Duration,

    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,

    /// Verify TLS certificates. Disable only for local development servers.
    pub verify_ssl: bool,

    /// `User-Agent` header value
    pub user_agent: String,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_TIMEOUT,
            pool_max_idle_per_host: 10,
            verify_ssl: true,
            user_agent: concat!("vaiz-rust/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
