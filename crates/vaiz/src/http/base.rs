//! The base client: one configured endpoint, one request primitive.

use std::sync::Arc;
use std::time::Instant;

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use vaiz_transport::{HttpRequest, HttpTransport, HttpTransportConfig, Transport};

use crate::config::ClientConfig;
use crate::envelope;
use crate::error::{Error, Result};

/// Header carrying the space (tenant) scope on every request.
pub const SPACE_ID_HEADER: HeaderName = HeaderName::from_static("current-space-id");

/// Header announcing the client API version the server should speak.
pub const APP_VERSION_HEADER: HeaderName = HeaderName::from_static("app-version");

/// Value sent in [`APP_VERSION_HEADER`] unless a default header replaces it.
pub const DEFAULT_APP_VERSION: &str = "1.68.1";

/// Owns the configuration, the precomputed header set and the transport.
///
/// Every resource method funnels through [`BaseClient::request`]. Nothing here
/// is mutated after construction, so a single instance is shared (via `Arc`)
/// by all resource handles and is safe to use from many tasks at once.
#[derive(Debug)]
pub struct BaseClient {
    config: ClientConfig,
    base_url: String,
    headers: HeaderMap,
    transport: Arc<dyn Transport>,
}

impl BaseClient {
    /// Build a base client, validating the configuration.
    ///
    /// When `transport` is `None` a [`HttpTransport`] is created using the
    /// configured timeout and TLS verification setting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the configuration is invalid, a
    /// header value cannot be encoded, or the default transport cannot be built.
    pub fn new(config: ClientConfig, transport: Option<Arc<dyn Transport>>) -> Result<Self> {
        config.validate()?;

        let base_url = config.parsed_base_url()?;
        let headers = build_headers(&config)?;

        let transport: Arc<dyn Transport> = match transport {
            Some(transport) => transport,
            None => Arc::new(
                HttpTransport::with_config(HttpTransportConfig {
                    timeout: config.timeout,
                    verify_ssl: config.verify_ssl,
                    ..Default::default()
                })
                .map_err(|e| Error::Configuration(e.to_string()))?,
            ),
        };

        Ok(Self {
            config,
            base_url,
            headers,
            transport,
        })
    }

    /// POST `body` as JSON to `{base_url}/{endpoint}` and decode the payload.
    ///
    /// Exactly one transport call is made. There is no retry.
    ///
    /// # Errors
    ///
    /// - [`Error::Configuration`] if `endpoint` is empty
    /// - [`Error::Serialization`] if `body` cannot be encoded
    /// - [`Error::Transport`] if the server could not be reached in time
    /// - [`Error::Api`] for a non-success status or an error envelope
    /// - [`Error::Schema`] if the response does not match `T`
    pub async fn request<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url_for(endpoint)?;
        let body = envelope::encode(body)?;

        debug!(
            endpoint,
            body_size = body.len(),
            transport = self.transport.name(),
            "Sending Vaiz API request"
        );

        let request = HttpRequest::post(url)
            .with_headers(self.headers.clone())
            .with_body(body)
            .with_timeout(self.config.timeout);

        let started = Instant::now();
        let response = match self.transport.send_http(request).await {
            Ok(response) => response,
            Err(error) => {
                debug!(endpoint, %error, "Vaiz API request failed in transport");
                return Err(error.into());
            }
        };

        debug!(
            endpoint,
            status = response.status,
            body_size = response.body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Received Vaiz API response"
        );

        envelope::decode(response.status, &response.body)
    }

    /// Full URL for an endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `endpoint` is empty.
    pub fn url_for(&self, endpoint: &str) -> Result<String> {
        let endpoint = endpoint.trim().trim_start_matches('/');
        if endpoint.is_empty() {
            return Err(Error::Configuration(
                "Endpoint name cannot be empty".to_string(),
            ));
        }
        Ok(format!("{}/{}", self.base_url, endpoint))
    }

    /// Base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers attached to every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The space id every request is scoped to.
    pub fn space_id(&self) -> &str {
        self.config.space_id.as_deref().unwrap_or_default()
    }
}

/// Compute the fixed header set once from configuration.
fn build_headers(config: &ClientConfig) -> Result<HeaderMap> {
    let mut headers = config.default_headers.clone();

    if let Some(api_key) = &config.api_key {
        let mut value = HeaderValue::try_from(format!("Bearer {}", api_key.expose_secret().trim()))
            .map_err(|_| {
                Error::Configuration("API key contains characters not allowed in a header".into())
            })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    if let Some(space_id) = &config.space_id {
        let value = HeaderValue::try_from(space_id.trim()).map_err(|_| {
            Error::Configuration(format!("Invalid space id header value: {}", space_id))
        })?;
        headers.insert(SPACE_ID_HEADER, value);
    }

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    headers
        .entry(APP_VERSION_HEADER)
        .or_insert(HeaderValue::from_static(DEFAULT_APP_VERSION));

    Ok(headers)
}
