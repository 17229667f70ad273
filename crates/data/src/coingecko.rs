//! CoinGecko REST client.
//!
//! Provides token search, OHLC candles, daily volume history and the spot
//! market snapshot for a catalog id.

use crate::error::Result;
use crate::http::{validate_identifier, HttpClient};
use crate::parse::{parse_decimal, parse_f64, parse_i64};
use market_pulse_core::{sort_ascending, Candle, Series, SpotMarketData, TimePoint, Token};
use nonzero_ext::nonzero;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::num::NonZeroU32;
use std::time::Duration;

/// Default CoinGecko API base URL.
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Quote currency for every request.
const VS_CURRENCY: &str = "usd";

// =============================================================================
// API Response Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    coins: Vec<RawSearchCoin>,
}

#[derive(Debug, Deserialize)]
struct RawSearchCoin {
    id: String,
    symbol: String,
    #[serde(default)]
    name: Option<String>,
}

impl From<RawSearchCoin> for Token {
    fn from(raw: RawSearchCoin) -> Self {
        let token = Token::new(raw.symbol.to_uppercase(), raw.id);
        match raw.name {
            Some(name) => token.with_name(name),
            None => token,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawMarketChart {
    total_volumes: Vec<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct RawCoin {
    market_data: RawMarketData,
}

#[derive(Debug, Deserialize)]
struct RawMarketData {
    #[serde(default)]
    current_price: Option<RawUsd>,
    #[serde(default)]
    price_change_percentage_24h: Value,
    #[serde(default)]
    price_change_percentage_7d: Value,
    #[serde(default)]
    total_volume: Option<RawUsd>,
    #[serde(default)]
    market_cap: Option<RawUsd>,
}

/// Per-currency object; only the USD leg is read.
#[derive(Debug, Deserialize)]
struct RawUsd {
    #[serde(default)]
    usd: Value,
}

impl RawUsd {
    fn usd(raw: Option<&Self>) -> &Value {
        raw.map_or(&Value::Null, |r| &r.usd)
    }
}

impl From<RawMarketData> for SpotMarketData {
    fn from(raw: RawMarketData) -> Self {
        Self {
            // A zero price is a placeholder, not a quote
            price: parse_decimal(RawUsd::usd(raw.current_price.as_ref())).filter(|p| *p > Decimal::ZERO),
            price_change_24h: parse_f64(&raw.price_change_percentage_24h),
            price_change_7d: parse_f64(&raw.price_change_percentage_7d),
            volume_24h: parse_decimal(RawUsd::usd(raw.total_volume.as_ref())),
            market_cap: parse_decimal(RawUsd::usd(raw.market_cap.as_ref())),
        }
    }
}

// =============================================================================
// CoinGeckoClient
// =============================================================================

/// CoinGecko REST client.
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    http: HttpClient,
}

impl CoinGeckoClient {
    /// Creates a client with default settings.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_config(COINGECKO_API_URL, Duration::from_secs(10), nonzero!(30u32))
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
            http: HttpClient::new("coingecko", base_url, timeout, requests_per_minute)?,
        })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Searches the token catalog.
    ///
    /// Results keep provider relevance order and are truncated to
    /// `max_results`. Search results never carry a futures ticker.
    ///
    /// # Errors
    /// Returns error if the request fails or the response is malformed.
    pub async fn search(&self, query: &str, max_results: usize) -> Result<Vec<Token>> {
        let response: RawSearchResponse = self
            .http
            .get("/search", &[("query", query.to_string())])
            .await?;

        Ok(response
            .coins
            .into_iter()
            .take(max_results)
            .map(Token::from)
            .collect())
    }

    /// Fetches OHLC candles over a trailing window of `days`.
    ///
    /// # Errors
    /// Returns error if the request fails or the response is malformed.
    pub async fn ohlc(&self, catalog_id: &str, days: u32) -> Result<Vec<Candle>> {
        let id = validate_identifier(catalog_id)?;
        let rows: Vec<Vec<Value>> = self
            .http
            .get(
                &format!("/coins/{id}/ohlc"),
                &[("vs_currency", VS_CURRENCY.to_string()), ("days", days.to_string())],
            )
            .await?;

        let total = rows.len();
        let mut candles: Vec<Candle> = rows.iter().filter_map(|row| parse_ohlc_row(row)).collect();
        if candles.len() < total {
            tracing::debug!(
                catalog_id = id,
                dropped = total - candles.len(),
                "Dropped unparseable OHLC rows"
            );
        }
        candles.sort_by_key(|c| c.timestamp_ms);

        Ok(candles)
    }

    /// Fetches the daily traded volume series over a trailing window of `days`.
    ///
    /// # Errors
    /// Returns error if the request fails or the response is malformed.
    pub async fn market_chart_volumes(&self, catalog_id: &str, days: u32) -> Result<Series<Decimal>> {
        let id = validate_identifier(catalog_id)?;
        let chart: RawMarketChart = self
            .http
            .get(
                &format!("/coins/{id}/market_chart"),
                &[
                    ("vs_currency", VS_CURRENCY.to_string()),
                    ("days", days.to_string()),
                    ("interval", "daily".to_string()),
                ],
            )
            .await?;

        let mut volumes: Series<Decimal> = chart
            .total_volumes
            .iter()
            .filter_map(|pair| parse_pair(pair, parse_decimal))
            .collect();
        sort_ascending(&mut volumes);

        Ok(volumes)
    }

    /// Fetches the spot market snapshot.
    ///
    /// # Errors
    /// Returns error if the request fails or the response has no `market_data`.
    pub async fn market_data(&self, catalog_id: &str) -> Result<SpotMarketData> {
        let id = validate_identifier(catalog_id)?;
        let coin: RawCoin = self
            .http
            .get(
                &format!("/coins/{id}"),
                &[
                    ("localization", "false".to_string()),
                    ("tickers", "false".to_string()),
                    ("market_data", "true".to_string()),
                    ("community_data", "false".to_string()),
                    ("developer_data", "false".to_string()),
                    ("sparkline", "false".to_string()),
                ],
            )
            .await?;

        Ok(SpotMarketData::from(coin.market_data))
    }
}

/// Parses a single OHLC row.
///
/// CoinGecko OHLC format:
/// ```text
/// [
///   1706616000000,  // 0: Open time (ms)
///   43210.5,        // 1: Open
///   43500.0,        // 2: High
///   43100.2,        // 3: Low
///   43400.8         // 4: Close
/// ]
/// ```
fn parse_ohlc_row(row: &[Value]) -> Option<Candle> {
    if row.len() < 5 {
        return None;
    }

    Some(Candle {
        timestamp_ms: parse_i64(&row[0])?,
        open: parse_decimal(&row[1])?,
        high: parse_decimal(&row[2])?,
        low: parse_decimal(&row[3])?,
        close: parse_decimal(&row[4])?,
    })
}

/// Parses a `[timestamp_ms, value]` pair.
fn parse_pair<T>(pair: &[Value], parse: fn(&Value) -> Option<T>) -> Option<TimePoint<T>> {
    match pair {
        [ts, value, ..] => Some(TimePoint::new(parse_i64(ts)?, parse(value)?)),
        _ => None,
    }
}
