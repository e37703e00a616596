//! Error types for the Raindrop SDK.

/// Result type for SDK operations.
pub type RaindropResult<T> = Result<T, RaindropError>;

/// Error types that can occur when talking to the Raindrop.io API.
#[derive(Debug, thiserror::Error)]
pub enum RaindropError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success status.
    #[error("Raindrop API error: {status_text}")]
    Api { status: u16, status_text: String },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl RaindropError {
    /// Create an API error from a response status.
    ///
    /// The message carries the status reason phrase, falling back to the
    /// numeric code for statuses without one.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        let status_text = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_u16().to_string());

        Self::Api {
            status: status.as_u16(),
            status_text,
        }
    }

    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_api_error_message_uses_reason_phrase() {
        let err = RaindropError::from_status(StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "Raindrop API error: Unauthorized");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_api_error_without_reason_phrase() {
        let status = StatusCode::from_u16(599).unwrap();
        let err = RaindropError::from_status(status);
        assert_eq!(err.to_string(), "Raindrop API error: 599");
    }

    #[test]
    fn test_config_error_has_no_status() {
        let err = RaindropError::Config("token is required".to_string());
        assert_eq!(err.status(), None);
    }
}
