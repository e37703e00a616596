// Process configuration, read once at startup

use crate::error::{ToolError, ToolResult};
use raindrop_sdk::{RaindropClient, RaindropResult};

/// Environment variable holding the Raindrop.io bearer token.
pub const TOKEN_ENV: &str = "RAINDROP_TOKEN";

#[derive(Clone)]
pub struct McpConfig {
    pub token: String,
    /// API base override; the public endpoint when `None`.
    pub base_url: Option<String>,
}

impl McpConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: None,
        }
    }

    /// Load from the process environment.
    pub fn from_env() -> ToolResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through `lookup`. A missing or blank token is a configuration error.
    pub fn from_lookup<F>(lookup: F) -> ToolResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_ENV)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ToolError::Configuration(format!("{} is not set", TOKEN_ENV)))?;

        Ok(Self::new(token))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Client bound to this configuration's token.
    pub fn client(&self) -> RaindropResult<RaindropClient> {
        let mut builder = RaindropClient::builder().token(self.token.clone());
        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url.clone());
        }
        builder.build()
    }
}

impl std::fmt::Debug for McpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
