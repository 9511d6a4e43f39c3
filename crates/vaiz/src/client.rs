//! Main client implementation for the Vaiz API

use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use secrecy::SecretString;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{
    config::ClientConfig,
    error::{Error, Result},
    http::{BaseClient, HeaderName, HeaderValue, Transport},
    resources::{
        Boards, Comments, Documents, Members, Milestones, Profiles, Projects, Spaces, Tasks,
    },
};

/// Main client for interacting with the Vaiz API.
///
/// Construction validates the configuration and precomputes the request
/// headers. The client is cheap to clone and can be shared across tasks;
/// every clone and every resource handle points at the same [`BaseClient`].
///
/// # Example
///
/// ```rust,no_run
/// use vaiz::Client;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::builder()
///     .api_key("vaiz-api-key")
///     .space_id("space-id")
///     .build()?;
///
/// let boards = client.boards().get_boards().await?;
/// println!("{} boards", boards.boards.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    base: Arc<BaseClient>,

    // Lazily created on first access
    tasks: OnceLock<Tasks>,
    projects: OnceLock<Projects>,
    boards: OnceLock<Boards>,
    milestones: OnceLock<Milestones>,
    members: OnceLock<Members>,
    profile: OnceLock<Profiles>,
    spaces: OnceLock<Spaces>,
    comments: OnceLock<Comments>,
    documents: OnceLock<Documents>,
}

impl Client {
    /// Create a client from a configuration object using the default transport.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the API key or space id is missing
    /// or blank, the base URL is invalid, or the HTTP transport cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::from_base(BaseClient::new(config, None)?))
    }

    /// Create a client that sends every request through `transport`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use vaiz::{Client, ClientConfig, HttpTransport, HttpTransportConfig};
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let transport = HttpTransport::with_config(HttpTransportConfig {
    ///     pool_max_idle_per_host: 2,
    ///     ..Default::default()
    /// })?;
    ///
    /// let client = Client::with_transport(
    ///     ClientConfig::new("vaiz-api-key", "space-id"),
    ///     Arc::new(transport),
    /// )?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let base = BaseClient::new(config, Some(transport))?;
        Ok(Self::from_base(base))
    }

    /// Create a client from `VAIZ_*` environment variables (and `.env`).
    ///
    /// # Errors
    ///
    /// Same as [`Client::new`]; a missing `VAIZ_API_KEY` or `VAIZ_SPACE_ID`
    /// is a configuration error.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    fn from_base(base: BaseClient) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                base: Arc::new(base),
                tasks: OnceLock::new(),
                projects: OnceLock::new(),
                boards: OnceLock::new(),
                milestones: OnceLock::new(),
                members: OnceLock::new(),
                profile: OnceLock::new(),
                spaces: OnceLock::new(),
                comments: OnceLock::new(),
                documents: OnceLock::new(),
            }),
        }
    }

    /// Access the Tasks API endpoint.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use vaiz::Client;
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let task = client.tasks().get_task("PRJ-12").await?.task;
    /// println!("{}: {}", task.id, task.name);
    /// # Ok(())
    /// # }
    /// ```
    pub fn tasks(&self) -> &Tasks {
        self.inner
            .tasks
            .get_or_init(|| Tasks::new(self.inner.base.clone()))
    }

    /// Access the Projects API endpoint.
    pub fn projects(&self) -> &Projects {
        self.inner
            .projects
            .get_or_init(|| Projects::new(self.inner.base.clone()))
    }

    /// Access the Boards API endpoint.
    pub fn boards(&self) -> &Boards {
        self.inner
            .boards
            .get_or_init(|| Boards::new(self.inner.base.clone()))
    }

    /// Access the Milestones API endpoint.
    pub fn milestones(&self) -> &Milestones {
        self.inner
            .milestones
            .get_or_init(|| Milestones::new(self.inner.base.clone()))
    }

    /// Access the space members API endpoint.
    pub fn members(&self) -> &Members {
        self.inner
            .members
            .get_or_init(|| Members::new(self.inner.base.clone()))
    }

    /// Access the Profile API endpoint.
    pub fn profile(&self) -> &Profiles {
        self.inner
            .profile
            .get_or_init(|| Profiles::new(self.inner.base.clone()))
    }

    /// Access the Spaces API endpoint.
    pub fn spaces(&self) -> &Spaces {
        self.inner
            .spaces
            .get_or_init(|| Spaces::new(self.inner.base.clone()))
    }

    /// Access the Comments API endpoint.
    pub fn comments(&self) -> &Comments {
        self.inner
            .comments
            .get_or_init(|| Comments::new(self.inner.base.clone()))
    }

    /// Access the Documents API endpoint.
    pub fn documents(&self) -> &Documents {
        self.inner
            .documents
            .get_or_init(|| Documents::new(self.inner.base.clone()))
    }

    /// Send a request to any endpoint and decode its payload.
    ///
    /// Useful for endpoints that have no typed wrapper yet. The same
    /// headers, envelope validation and error mapping apply.
    pub async fn request<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.inner.base.request(endpoint, body).await
    }

    /// The shared base client.
    pub fn base(&self) -> &BaseClient {
        &self.inner.base
    }

    /// Base URL requests are sent to, without trailing slash.
    pub fn base_url(&self) -> &str {
        self.inner.base.base_url()
    }

    /// Space id every request is scoped to.
    pub fn space_id(&self) -> &str {
        self.inner.base.space_id()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url())
            .field("space_id", &self.space_id())
            .finish_non_exhaustive()
    }
}

/// Builder for creating a configured Client.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Start from an existing configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the API key for authentication.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
        self
    }

    /// Set the space every request is scoped to.
    pub fn space_id(mut self, space_id: impl Into<String>) -> Self {
        self.config.space_id = Some(space_id.into());
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Enable or disable TLS certificate verification for the default transport.
    pub fn verify_ssl(mut self, verify_ssl: bool) -> Self {
        self.config.verify_ssl = verify_ssl;
        self
    }

    /// Add a custom default header.
    ///
    /// The authorization, space and content-type headers always take
    /// precedence over a default header with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the header name or value is invalid
    /// according to HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: HeaderName = key_str
            .parse()
            .map_err(|_| Error::Configuration(format!("Invalid header name: {}", key_str)))?;
        let value: HeaderValue = value_str.parse().map_err(|_| {
            Error::Configuration(format!("Invalid value for header {}", key_str))
        })?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Send requests through a custom transport instead of the default HTTP one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client with the configured options.
    ///
    /// # Errors
    ///
    /// See [`Client::new`].
    pub fn build(self) -> Result<Client> {
        let base = BaseClient::new(self.config, self.transport)?;
        Ok(Client::from_base(base))
    }
}
