//! Error types for the catalog gateway.

use thiserror::Error;

/// Main error type for all gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Caller-supplied input failed validation. Never reaches the network.
    #[error("{0}")]
    InvalidInput(String),

    /// The upstream responded, but the requested resource does not exist
    /// or lacks its primary identifier.
    #[error("{0}")]
    NotFound(String),

    /// A bounded upstream call did not complete in time.
    #[error("Request timeout")]
    Timeout,

    /// HTTP request failed.
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Upstream returned malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Stream message decryption failed.
    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl GatewayError {
    /// Shorthand for the standard missing/invalid seokey rejection.
    pub fn invalid_seokey() -> Self {
        GatewayError::NotFound("Missing or invalid seokey.".to_string())
    }

    /// Shorthand for the standard empty-container rejection.
    pub fn no_results() -> Self {
        GatewayError::NotFound("Unable to find any results!".to_string())
    }
}

/// Result type alias for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GatewayError::invalid_seokey().to_string(),
            "Missing or invalid seokey."
        );
        assert_eq!(
            GatewayError::no_results().to_string(),
            "Unable to find any results!"
        );
        assert_eq!(GatewayError::Timeout.to_string(), "Request timeout");
    }
}
