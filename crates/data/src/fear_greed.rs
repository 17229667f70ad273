//! Crypto Fear & Greed index client.
//!
//! The index is a market-wide sentiment score in 0-100. The feed returns
//! daily points newest first with timestamps in seconds; this client
//! converts them to milliseconds and ascending order.

use crate::error::Result;
use crate::http::HttpClient;
use crate::parse::{parse_f64, parse_i64};
use market_pulse_core::{sort_ascending, Series, TimePoint};
use nonzero_ext::nonzero;
use serde::Deserialize;
use serde_json::Value;
use std::num::NonZeroU32;
use std::time::Duration;

/// Default Fear & Greed API base URL.
pub const FEAR_GREED_API_URL: &str = "https://api.alternative.me";

#[derive(Debug, Deserialize)]
struct RawIndexResponse {
    data: Vec<RawIndexPoint>,
}

#[derive(Debug, Deserialize)]
struct RawIndexPoint {
    #[serde(default)]
    value: Value,
    #[serde(default)]
    timestamp: Value,
}

impl RawIndexPoint {
    fn to_point(&self) -> Option<TimePoint<f64>> {
        let seconds = parse_i64(&self.timestamp)?;
        let value = parse_f64(&self.value)?;
        Some(TimePoint::new(seconds.checked_mul(1000)?, value))
    }
}

/// Fear & Greed index client.
#[derive(Debug, Clone)]
pub struct FearGreedClient {
    http: HttpClient,
}

impl FearGreedClient {
    /// Creates a client with default settings.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_config(FEAR_GREED_API_URL, Duration::from_secs(10), nonzero!(60u32))
    }

    /// Creates a client with custom configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        requests_per_minute: NonZeroU32,
    ) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new("fear_greed", base_url, timeout, requests_per_minute)?,
        })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Fetches the last `limit` daily index values, oldest first.
    ///
    /// # Errors
    /// Returns error if the request fails or the response has no `data` array.
    pub async fn history(&self, limit: u32) -> Result<Series<f64>> {
        let response: RawIndexResponse = self
            .http
            .get("/fng/", &[("limit", limit.to_string())])
            .await?;

        let mut series: Series<f64> = response
            .data
            .iter()
            .filter_map(RawIndexPoint::to_point)
            .collect();
        sort_ascending(&mut series);

        Ok(series)
    }
}
