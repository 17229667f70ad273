//! Error types for provider clients.
//!
//! These errors never leave the provider boundary: the `MarketDataSource`
//! implementation logs them and reports the metric as unavailable.

use thiserror::Error;

/// Errors that can occur when calling a market data provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network error.
    #[error("network error: {0}")]
    Network(String),

    /// Request timeout.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// Provider answered with a non-success status.
    #[error("API error: {status_code} - {message}")]
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Response body or reason.
        message: String,
    },

    /// Response was valid JSON but not the expected shape.
    #[error("malformed payload: {0}")]
    Malformed(String),

    /// Response body was not valid JSON.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Identifier rejected before any request was made.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}

impl ProviderError {
    /// Creates an API error from status code and message.
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status_code,
            message: message.into(),
        }
    }

    /// Creates a malformed payload error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Returns true if the same request could succeed later.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) => true,
            Self::Api { status_code, .. } => *status_code == 429 || *status_code >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Network(format!("connection failed: {err}"))
        } else if err.is_decode() {
            Self::Serialization(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => Self::Malformed(err.to_string()),
            _ => Self::Serialization(err.to_string()),
        }
    }
}

/// Result type alias for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_construction() {
        let err = ProviderError::api(400, "Invalid symbol.");
        assert!(matches!(
            err,
            ProviderError::Api {
                status_code: 400,
                ..
            }
        ));
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("Invalid symbol."));
    }

    #[test]
    fn test_transient_classification() {
        assert!(ProviderError::Network("reset".into()).is_transient());
        assert!(ProviderError::Timeout("10s".into()).is_transient());
        assert!(ProviderError::api(429, "slow down").is_transient());
        assert!(ProviderError::api(502, "bad gateway").is_transient());
        assert!(!ProviderError::api(404, "not found").is_transient());
        assert!(!ProviderError::malformed("missing data").is_transient());
        assert!(!ProviderError::InvalidIdentifier("../x".into()).is_transient());
    }

    #[test]
    fn test_from_serde_json_data_error() {
        let err = serde_json::from_str::<Vec<u32>>("{\"a\": 1}").unwrap_err();
        assert!(matches!(ProviderError::from(err), ProviderError::Malformed(_)));
    }

    #[test]
    fn test_from_serde_json_syntax_error() {
        let err = serde_json::from_str::<Vec<u32>>("[1, 2").unwrap_err();
        assert!(matches!(ProviderError::from(err), ProviderError::Serialization(_)));
    }
}
