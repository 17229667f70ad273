use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub providers: ProviderConfig,
    pub windows: WindowConfig,
    pub search: SearchConfig,
}

/// Endpoints and transport limits for the external data providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub coingecko_url: String,
    pub fear_greed_url: String,
    pub binance_futures_url: String,
    /// Upper bound on any single provider call, in seconds
    pub request_timeout_secs: u64,
    /// Per-vendor request budget
    pub requests_per_minute: u32,
}

/// Trailing window parameters for each series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub ohlc_days: u32,
    pub market_chart_days: u32,
    pub fear_greed_limit: u32,
    pub funding_limit: u32,
    pub ratio_period: String,
    pub ratio_limit: u32,
    pub open_interest_period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Queries shorter than this (in characters) never reach the network
    pub min_query_len: usize,
    pub max_results: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            coingecko_url: "https://api.coingecko.com/api/v3".to_string(),
            fear_greed_url: "https://api.alternative.me".to_string(),
            binance_futures_url: "https://fapi.binance.com".to_string(),
            request_timeout_secs: 10,
            requests_per_minute: 60,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            ohlc_days: 30,
            market_chart_days: 30,
            fear_greed_limit: 60,
            funding_limit: 60,
            ratio_period: "1h".to_string(),
            ratio_limit: 100,
            open_interest_period: "5m".to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            max_results: 20,
        }
    }
}
