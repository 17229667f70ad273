//! Provider seam consumed by the aggregator and the token directory.
//!
//! Every `MarketDataSource` method is best-effort: provider failures are
//! logged here and surface as `None`, never as an error.

use crate::binance_futures::BinanceFuturesClient;
use crate::coingecko::CoinGeckoClient;
use crate::error::Result;
use crate::fear_greed::FearGreedClient;
use crate::period::Period;
use anyhow::Context;
use async_trait::async_trait;
use market_pulse_core::{AppConfig, Candle, Series, SpotMarketData, Token, WindowConfig};
use rust_decimal::Decimal;
use std::num::NonZeroU32;
use std::time::Duration;

/// Source of per-token market metrics.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Spot price, changes, volume and market cap.
    async fn spot_market_data(&self, token: &Token) -> Option<SpotMarketData>;

    /// OHLC candles, oldest first.
    async fn ohlc(&self, token: &Token) -> Option<Vec<Candle>>;

    /// Daily traded volume, oldest first.
    async fn volume_history(&self, token: &Token) -> Option<Series<Decimal>>;

    /// Market-wide fear & greed index history, oldest first.
    async fn fear_greed(&self) -> Option<Series<f64>>;

    /// Latest open interest notional in USD.
    async fn open_interest(&self, token: &Token) -> Option<Decimal>;

    /// Funding rate settlements, oldest first.
    async fn funding_history(&self, token: &Token) -> Option<Series<f64>>;

    /// Taker buy/sell volume ratio, oldest first.
    async fn taker_ratio(&self, token: &Token) -> Option<Series<f64>>;

    /// Global account long/short ratio, oldest first.
    async fn long_short_ratio(&self, token: &Token) -> Option<Series<f64>>;

    /// Top trader account long/short ratio, oldest first.
    async fn top_trader_ratio(&self, token: &Token) -> Option<Series<f64>>;
}

/// Free-text token catalog search.
#[async_trait]
pub trait TokenSearch: Send + Sync {
    /// Returns up to `max_results` tokens in provider relevance order.
    ///
    /// Resolves to an empty list on failure.
    async fn search_tokens(&self, query: &str, max_results: usize) -> Vec<Token>;
}

#[async_trait]
impl TokenSearch for CoinGeckoClient {
    async fn search_tokens(&self, query: &str, max_results: usize) -> Vec<Token> {
        settle("coingecko", "search", query, self.search(query, max_results).await)
            .unwrap_or_default()
    }
}

/// Window parameters with periods already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Windows {
    pub ohlc_days: u32,
    pub market_chart_days: u32,
    pub fear_greed_limit: u32,
    pub funding_limit: u32,
    pub ratio_period: Period,
    pub ratio_limit: u32,
    pub open_interest_period: Period,
}

impl TryFrom<&WindowConfig> for Windows {
    type Error = anyhow::Error;

    fn try_from(config: &WindowConfig) -> anyhow::Result<Self> {
        Ok(Self {
            ohlc_days: config.ohlc_days,
            market_chart_days: config.market_chart_days,
            fear_greed_limit: config.fear_greed_limit,
            funding_limit: config.funding_limit,
            ratio_period: config
                .ratio_period
                .parse()
                .context("windows.ratio_period")?,
            ratio_limit: config.ratio_limit,
            open_interest_period: config
                .open_interest_period
                .parse()
                .context("windows.open_interest_period")?,
        })
    }
}

impl Default for Windows {
    fn default() -> Self {
        Self {
            ohlc_days: 30,
            market_chart_days: 30,
            fear_greed_limit: 60,
            funding_limit: 60,
            ratio_period: Period::OneHour,
            ratio_limit: 100,
            open_interest_period: Period::FiveMinutes,
        }
    }
}

/// The three vendor clients plus the window parameters for each series.
#[derive(Debug, Clone)]
pub struct ProviderSet {
    coingecko: CoinGeckoClient,
    fear_greed: FearGreedClient,
    binance: BinanceFuturesClient,
    windows: Windows,
}

impl ProviderSet {
    /// Assembles a provider set from already-built clients.
    #[must_use]
    pub fn new(
        coingecko: CoinGeckoClient,
        fear_greed: FearGreedClient,
        binance: BinanceFuturesClient,
        windows: Windows,
    ) -> Self {
        Self {
            coingecko,
            fear_greed,
            binance,
            windows,
        }
    }

    /// Builds all clients from application configuration.
    ///
    /// # Errors
    /// Returns error if a period string is invalid, the request budget is
    /// zero or an HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let providers = &config.providers;
        let timeout = Duration::from_secs(providers.request_timeout_secs);
        let rpm = NonZeroU32::new(providers.requests_per_minute)
            .context("providers.requests_per_minute must be greater than zero")?;

        let coingecko = CoinGeckoClient::with_config(&providers.coingecko_url, timeout, rpm)?;
        let fear_greed = FearGreedClient::with_config(&providers.fear_greed_url, timeout, rpm)?;
        let binance = BinanceFuturesClient::with_config(&providers.binance_futures_url, timeout, rpm)?;
        let windows = Windows::try_from(&config.windows)?;

        tracing::debug!(
            coingecko = %providers.coingecko_url,
            fear_greed = %providers.fear_greed_url,
            binance = %providers.binance_futures_url,
            "Provider set configured"
        );

        Ok(Self::new(coingecko, fear_greed, binance, windows))
    }

    /// Returns the token search client.
    #[must_use]
    pub fn coingecko(&self) -> &CoinGeckoClient {
        &self.coingecko
    }

    #[must_use]
    pub fn windows(&self) -> &Windows {
        &self.windows
    }
}

#[async_trait]
impl MarketDataSource for ProviderSet {
    async fn spot_market_data(&self, token: &Token) -> Option<SpotMarketData> {
        let result = self.coingecko.market_data(&token.catalog_id).await;
        settle("coingecko", "market_data", &token.catalog_id, result)
    }

    async fn ohlc(&self, token: &Token) -> Option<Vec<Candle>> {
        let result = self
            .coingecko
            .ohlc(&token.catalog_id, self.windows.ohlc_days)
            .await;
        settle("coingecko", "ohlc", &token.catalog_id, result)
    }

    async fn volume_history(&self, token: &Token) -> Option<Series<Decimal>> {
        let result = self
            .coingecko
            .market_chart_volumes(&token.catalog_id, self.windows.market_chart_days)
            .await;
        settle("coingecko", "market_chart", &token.catalog_id, result)
    }

    async fn fear_greed(&self) -> Option<Series<f64>> {
        let result = self.fear_greed.history(self.windows.fear_greed_limit).await;
        settle("fear_greed", "history", "market", result)
    }

    async fn open_interest(&self, token: &Token) -> Option<Decimal> {
        let ticker = token.futures_ticker()?;
        let result = self
            .binance
            .open_interest(ticker, self.windows.open_interest_period)
            .await;
        settle("binance_futures", "open_interest", ticker, result).flatten()
    }

    async fn funding_history(&self, token: &Token) -> Option<Series<f64>> {
        let ticker = token.futures_ticker()?;
        let result = self
            .binance
            .funding_history(ticker, self.windows.funding_limit)
            .await;
        settle("binance_futures", "funding_rate", ticker, result)
    }

    async fn taker_ratio(&self, token: &Token) -> Option<Series<f64>> {
        let ticker = token.futures_ticker()?;
        let result = self
            .binance
            .taker_ratio(ticker, self.windows.ratio_period, self.windows.ratio_limit)
            .await;
        settle("binance_futures", "taker_ratio", ticker, result)
    }

    async fn long_short_ratio(&self, token: &Token) -> Option<Series<f64>> {
        let ticker = token.futures_ticker()?;
        let result = self
            .binance
            .global_long_short(ticker, self.windows.ratio_period, self.windows.ratio_limit)
            .await;
        settle("binance_futures", "long_short_ratio", ticker, result)
    }

    async fn top_trader_ratio(&self, token: &Token) -> Option<Series<f64>> {
        let ticker = token.futures_ticker()?;
        let result = self
            .binance
            .top_trader_long_short(ticker, self.windows.ratio_period, self.windows.ratio_limit)
            .await;
        settle("binance_futures", "top_trader_ratio", ticker, result)
    }
}

/// Converts a provider result into an optional metric, logging failures.
fn settle<T>(provider: &str, metric: &str, subject: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(
                provider,
                metric,
                subject,
                transient = e.is_transient(),
                error = %e,
                "Provider call failed, metric unavailable"
            );
            None
        }
    }
}
