//! Binance USDT-margined futures REST client.
//!
//! Covers the public statistics endpoints used for positioning metrics:
//! open interest, funding rate history, taker buy/sell volume ratio and the
//! account long/short ratios. All endpoints are keyed by a futures ticker
//! such as `SOLUSDT`.

use crate::error::Result;
use crate::http::{validate_identifier, HttpClient};
use crate::parse::{parse_decimal, parse_f64, parse_i64};
use crate::period::Period;
use market_pulse_core::{sort_ascending, Series, TimePoint};
use nonzero_ext::nonzero;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::num::NonZeroU32;
use std::time::Duration;

/// Default Binance futures API base URL.
pub const BINANCE_FUTURES_API_URL: &str = "https://fapi.binance.com";

// =============================================================================
// API Response Types
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOpenInterest {
    #[serde(default)]
    timestamp: Value,
    #[serde(default)]
    sum_open_interest_value: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFundingRate {
    #[serde(default)]
    funding_time: Value,
    #[serde(default)]
    funding_rate: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTakerRatio {
    #[serde(default)]
    timestamp: Value,
    #[serde(default)]
    buy_sell_ratio: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLongShortRatio {
    #[serde(default)]
    timestamp: Value,
    #[serde(default)]
    long_short_ratio: Value,
}

// =============================================================================
// BinanceFuturesClient
// =============================================================================

/// Binance futures statistics client.
#[derive(Debug, Clone)]
pub struct BinanceFuturesClient {
    http: HttpClient,
}

impl BinanceFuturesClient {
    /// Creates a client with default settings.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_config(
            BINANCE_FUTURES_API_URL,
            Duration::from_secs(10),
            nonzero!(600u32),
        )
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
            http: HttpClient::new("binance_futures", base_url, timeout, requests_per_minute)?,
        })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Fetches the latest aggregate open interest in USD.
    ///
    /// Returns `Ok(None)` when the ticker has no statistics yet.
    ///
    /// # Errors
    /// Returns error if the request fails or the response is malformed.
    pub async fn open_interest(&self, ticker: &str, period: Period) -> Result<Option<Decimal>> {
        let symbol = validate_identifier(ticker)?;
        let rows: Vec<RawOpenInterest> = self
            .http
            .get(
                "/futures/data/openInterestHist",
                &[
                    ("symbol", symbol.to_string()),
                    ("period", period.as_str().to_string()),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;

        let mut points: Series<Decimal> = rows
            .iter()
            .filter_map(|r| point(&r.timestamp, &r.sum_open_interest_value, parse_decimal))
            .collect();
        sort_ascending(&mut points);

        Ok(points.last().map(|p| p.value))
    }

    /// Fetches the last `limit` funding rate settlements, oldest first.
    ///
    /// Rates are per-period fractions, e.g. `0.0001` for 0.01%.
    ///
    /// # Errors
    /// Returns error if the request fails or the response is malformed.
    pub async fn funding_history(&self, ticker: &str, limit: u32) -> Result<Series<f64>> {
        let symbol = validate_identifier(ticker)?;
        let rows: Vec<RawFundingRate> = self
            .http
            .get(
                "/fapi/v1/fundingRate",
                &[("symbol", symbol.to_string()), ("limit", limit.to_string())],
            )
            .await?;

        Ok(collect_series(
            rows.iter()
                .map(|r| point(&r.funding_time, &r.funding_rate, parse_f64)),
        ))
    }

    /// Fetches the taker buy/sell volume ratio history, oldest first.
    ///
    /// # Errors
    /// Returns error if the request fails or the response is malformed.
    pub async fn taker_ratio(&self, ticker: &str, period: Period, limit: u32) -> Result<Series<f64>> {
        let symbol = validate_identifier(ticker)?;
        let rows: Vec<RawTakerRatio> = self
            .http
            .get(
                "/futures/data/takerlongshortRatio",
                &stats_query(symbol, period, limit),
            )
            .await?;

        Ok(collect_series(
            rows.iter()
                .map(|r| point(&r.timestamp, &r.buy_sell_ratio, parse_f64)),
        ))
    }

    /// Fetches the global account long/short ratio history, oldest first.
    ///
    /// # Errors
    /// Returns error if the request fails or the response is malformed.
    pub async fn global_long_short(
        &self,
        ticker: &str,
        period: Period,
        limit: u32,
    ) -> Result<Series<f64>> {
        self.long_short("/futures/data/globalLongShortAccountRatio", ticker, period, limit)
            .await
    }

    /// Fetches the top trader account long/short ratio history, oldest first.
    ///
    /// # Errors
    /// Returns error if the request fails or the response is malformed.
    pub async fn top_trader_long_short(
        &self,
        ticker: &str,
        period: Period,
        limit: u32,
    ) -> Result<Series<f64>> {
        self.long_short("/futures/data/topLongShortAccountRatio", ticker, period, limit)
            .await
    }

    async fn long_short(
        &self,
        path: &str,
        ticker: &str,
        period: Period,
        limit: u32,
    ) -> Result<Series<f64>> {
        let symbol = validate_identifier(ticker)?;
        let rows: Vec<RawLongShortRatio> = self
            .http
            .get(path, &stats_query(symbol, period, limit))
            .await?;

        Ok(collect_series(
            rows.iter()
                .map(|r| point(&r.timestamp, &r.long_short_ratio, parse_f64)),
        ))
    }
}

fn stats_query(symbol: &str, period: Period, limit: u32) -> [(&'static str, String); 3] {
    [
        ("symbol", symbol.to_string()),
        ("period", period.as_str().to_string()),
        ("limit", limit.to_string()),
    ]
}

fn point<T>(timestamp: &Value, value: &Value, parse: fn(&Value) -> Option<T>) -> Option<TimePoint<T>> {
    Some(TimePoint::new(parse_i64(timestamp)?, parse(value)?))
}

fn collect_series<T>(points: impl Iterator<Item = Option<TimePoint<T>>>) -> Series<T> {
    let mut series: Series<T> = points.flatten().collect();
    sort_ascending(&mut series);
    series
}
