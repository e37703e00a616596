//! Configuration types for the Raindrop SDK.

use std::time::Duration;
use url::Url;

/// Public REST endpoint of Raindrop.io.
pub const DEFAULT_BASE_URL: &str = "https://api.raindrop.io/rest/v1";

/// Configuration for the Raindrop client.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the REST API.
    pub base_url: Url,
    /// Bearer token sent with every request.
    pub token: String,
    /// Request timeout. `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a configuration against the given base URL.
    pub fn new(base_url: Url, token: impl Into<String>) -> Self {
        Self {
            base_url,
            token: token.into(),
            timeout: None,
        }
    }
}

// Keep the token out of debug output.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_new() {
        let url = Url::parse(DEFAULT_BASE_URL).unwrap();
        let config = ClientConfig::new(url.clone(), "secret");

        assert_eq!(config.base_url, url);
        assert_eq!(config.token, "secret");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_debug_redacts_token() {
        let url = Url::parse(DEFAULT_BASE_URL).unwrap();
        let config = ClientConfig::new(url, "very-secret-token");

        let debug = format!("{:?}", config);
        assert!(!debug.contains("very-secret-token"));
        assert!(debug.contains("<redacted>"));
    }
}
