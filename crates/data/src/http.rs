//! Shared rate-limited JSON GET client.

use crate::error::{ProviderError, Result};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

type DirectRateLimiter = RateLimiter<
    governor::state::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
>;

/// Rate-limited HTTP client bound to one provider's base URL.
#[derive(Clone)]
pub struct HttpClient {
    /// Provider name used in logs
    provider: &'static str,
    /// HTTP client
    http: Client,
    /// Base URL for API
    base_url: String,
    /// Rate limiter (requests per minute)
    rate_limiter: Arc<DirectRateLimiter>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a client.
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn new(
        provider: &'static str,
        base_url: impl Into<String>,
        timeout: Duration,
        requests_per_minute: NonZeroU32,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Network(format!("failed to build HTTP client: {e}")))?;

        let quota = Quota::per_minute(requests_per_minute);
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Ok(Self {
            provider,
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            rate_limiter,
        })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the provider name.
    #[must_use]
    pub fn provider(&self) -> &'static str {
        self.provider
    }

    /// Waits for rate limit and makes a GET request.
    ///
    /// # Errors
    /// Returns error on transport failure, non-success status or an
    /// unexpected response body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(provider = self.provider, "GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::api(status.as_u16(), text));
        }

        let body = response.bytes().await?;
        let parsed = serde_json::from_slice::<T>(&body)?;
        Ok(parsed)
    }
}

/// Validates an identifier that is interpolated into a URL path or query.
///
/// Valid identifiers contain only ASCII alphanumerics, hyphens, underscores
/// and dots, and never a `..` sequence.
pub fn validate_identifier(id: &str) -> Result<&str> {
    if id.is_empty() {
        return Err(ProviderError::InvalidIdentifier(
            "identifier cannot be empty".to_string(),
        ));
    }

    if id.contains("..") {
        return Err(ProviderError::InvalidIdentifier(format!(
            "contains forbidden sequence: {id}"
        )));
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        return Err(ProviderError::InvalidIdentifier(format!(
            "must contain only alphanumeric, hyphen, underscore or dot: {id}"
        )));
    }

    if id.len() > 128 {
        return Err(ProviderError::InvalidIdentifier(format!(
            "exceeds maximum length of 128: {}",
            id.len()
        )));
    }

    Ok(id)
}
