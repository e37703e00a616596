//! Main client for the Raindrop SDK.

use crate::api::*;
use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::{RaindropError, RaindropResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main client for interacting with the Raindrop.io API.
#[derive(Debug, Clone)]
pub struct RaindropClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl RaindropClient {
    /// Create a new client builder.
    pub fn builder() -> RaindropClientBuilder {
        RaindropClientBuilder::new()
    }

    /// Create a client against the public API with the given token.
    pub fn new(token: impl Into<String>) -> RaindropResult<Self> {
        Self::builder().token(token).build()
    }

    /// Create a client from configuration.
    fn from_config(config: ClientConfig) -> RaindropResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Get the raindrops (bookmarks) API.
    pub fn raindrops(&self) -> RaindropsApi<'_> {
        RaindropsApi::new(self)
    }

    /// Get the collections API.
    pub fn collections(&self) -> CollectionsApi<'_> {
        CollectionsApi::new(self)
    }
}

/// Builder for creating a RaindropClient.
#[derive(Default)]
pub struct RaindropClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
    timeout: Option<Duration>,
}

impl RaindropClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the API base URL. Defaults to the public Raindrop.io endpoint.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the bearer token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set a request timeout. Without one, requests wait indefinitely.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> RaindropResult<RaindropClient> {
        let token = self
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| RaindropError::Config("token is required".to_string()))?;

        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let config = ClientConfig {
            base_url,
            token,
            timeout: self.timeout,
        };

        RaindropClient::from_config(config)
    }
}
