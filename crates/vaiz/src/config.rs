//! Configuration for the Vaiz client

use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

use crate::error::{Error, Result};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.vaiz.com/v4";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the Vaiz client.
///
/// Read once when the [`Client`](crate::Client) is built and immutable
/// afterwards. The API key is held as a [`SecretString`], so `Debug` output
/// never reveals it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key, sent as `Authorization: Bearer <key>`
    pub api_key: Option<SecretString>,

    /// Space (tenant) identifier, sent as `current-space-id`
    pub space_id: Option<String>,

    /// Base URL for the API; endpoints are appended as `{base_url}/{endpoint}`
    pub base_url: String,

    /// Timeout applied to each request
    pub timeout: Duration,

    /// Verify TLS certificates
    pub verify_ssl: bool,

    /// Extra headers to include with every request
    pub default_headers: HeaderMap,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            space_id: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            verify_ssl: true,
            default_headers: HeaderMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with the two required credentials.
    pub fn new(api_key: impl Into<String>, space_id: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::new(api_key.into().into_boxed_str())),
            space_id: Some(space_id.into()),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    /// This will look for:
    /// - `VAIZ_API_KEY` for authentication
    /// - `VAIZ_SPACE_ID` for the space scope
    /// - `VAIZ_BASE_URL` for the API base URL
    /// - `VAIZ_TIMEOUT` for request timeout (in seconds)
    /// - `VAIZ_VERIFY_SSL` (`false`/`0` disables certificate checks)
    ///
    /// Missing credentials are not an error here; they are reported when the
    /// client is built.
    #[cfg(feature = "env")]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build a configuration from `VAIZ_*` variables supplied by `lookup`.
    ///
    /// Reads the same variables as [`ClientConfig::from_env`] but never
    /// touches the process environment or a `.env` file itself.
    ///
    /// ```
    /// use vaiz::ClientConfig;
    ///
    /// let config = ClientConfig::from_vars(|name| match name {
    ///     "VAIZ_API_KEY" => Some("key".to_string()),
    ///     "VAIZ_SPACE_ID" => Some("space".to_string()),
    ///     _ => None,
    /// });
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(api_key) = lookup("VAIZ_API_KEY") {
            config.api_key = Some(SecretString::new(api_key.into_boxed_str()));
        }

        if let Some(space_id) = lookup("VAIZ_SPACE_ID") {
            config.space_id = Some(space_id);
        }

        if let Some(base_url) = lookup("VAIZ_BASE_URL") {
            config.base_url = base_url;
        }

        if let Some(timeout_str) = lookup("VAIZ_TIMEOUT")
            && let Ok(timeout_secs) = timeout_str.trim().parse::<u64>()
        {
            config.timeout = Duration::from_secs(timeout_secs);
        }

        if let Some(verify) = lookup("VAIZ_VERIFY_SSL") {
            config.verify_ssl = !matches!(
                verify.trim().to_ascii_lowercase().as_str(),
                "false" | "0" | "no" | "off"
            );
        }

        config
    }

    /// Check required fields and the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the API key or space id is missing
    /// or blank, the timeout is zero, or the base URL is not an absolute
    /// `http`/`https` URL.
    pub fn validate(&self) -> Result<()> {
        match &self.api_key {
            Some(key) if !key.expose_secret().trim().is_empty() => {}
            _ => {
                return Err(Error::Configuration(
                    "API key is required and cannot be empty".to_string(),
                ));
            }
        }

        match &self.space_id {
            Some(space) if !space.trim().is_empty() => {}
            _ => {
                return Err(Error::Configuration(
                    "Space id is required and cannot be empty".to_string(),
                ));
            }
        }

        if self.timeout.is_zero() {
            return Err(Error::Configuration(
                "Timeout must be greater than zero".to_string(),
            ));
        }

        self.parsed_base_url().map(|_| ())
    }

    /// The base URL with any trailing slash removed.
    pub(crate) fn parsed_base_url(&self) -> Result<String> {
        let trimmed = self.base_url.trim();
        if trimmed.is_empty() {
            return Err(Error::Configuration(
                "Base URL cannot be empty".to_string(),
            ));
        }

        let url: Url = trimmed
            .parse()
            .map_err(|e| Error::Configuration(format!("Invalid base URL '{}': {}", trimmed, e)))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(Error::Configuration(format!(
                    "Invalid URL scheme '{}'. Only 'http' and 'https' are supported.",
                    scheme
                )));
            }
        }

        Ok(trimmed.trim_end_matches('/').to_string())
    }
}
