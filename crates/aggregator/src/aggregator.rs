//! Metrics aggregator.
//!
//! Issues every provider call for a token concurrently, waits for all of them
//! to settle and reconciles the results into one snapshot. A failed or
//! timed-out call only blanks its own fields.

use market_pulse_core::{latest_value, Candle, MarketSnapshot, Series, SpotMarketData, Token};
use market_pulse_data::MarketDataSource;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Upper bound on a single provider call.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Settled provider results for one token, before reconciliation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFeeds {
    pub spot: Option<SpotMarketData>,
    pub candles: Option<Vec<Candle>>,
    pub volumes: Option<Series<Decimal>>,
    pub fear_greed: Option<Series<f64>>,
    pub open_interest: Option<Decimal>,
    pub funding: Option<Series<f64>>,
    pub taker: Option<Series<f64>>,
    pub long_short: Option<Series<f64>>,
    pub top_trader: Option<Series<f64>>,
}

/// Concurrent snapshot builder over a market data source.
#[derive(Clone)]
pub struct MetricsAggregator {
    source: Arc<dyn MarketDataSource>,
    call_timeout: Duration,
}

impl std::fmt::Debug for MetricsAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsAggregator")
            .field("call_timeout", &self.call_timeout)
            .finish_non_exhaustive()
    }
}

impl MetricsAggregator {
    /// Creates an aggregator with the default per-call timeout.
    #[must_use]
    pub fn new(source: Arc<dyn MarketDataSource>) -> Self {
        Self {
            source,
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Builder method to set the per-call timeout.
    #[must_use]
    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    #[must_use]
    pub fn call_timeout(&self) -> Duration {
        self.call_timeout
    }

    /// Builds a snapshot for `token`.
    ///
    /// Never fails: unavailable metrics are `None` in the result.
    pub async fn get_snapshot(&self, token: &Token) -> MarketSnapshot {
        let feeds = self.fetch(token).await;
        let snapshot = reconcile(token.clone(), feeds);

        tracing::info!(
            token = %token,
            populated = snapshot.populated_fields(),
            "Aggregated market snapshot"
        );

        snapshot
    }

    /// Runs all nine provider calls and waits for every one to settle.
    pub async fn fetch(&self, token: &Token) -> RawFeeds {
        let source = self.source.as_ref();

        let (spot, candles, volumes, fear_greed, open_interest, funding, taker, long_short, top_trader) = tokio::join!(
            self.bounded("spot_market_data", token, source.spot_market_data(token)),
            self.bounded("ohlc", token, source.ohlc(token)),
            self.bounded("volume_history", token, source.volume_history(token)),
            self.bounded("fear_greed", token, source.fear_greed()),
            self.bounded("open_interest", token, source.open_interest(token)),
            self.bounded("funding_history", token, source.funding_history(token)),
            self.bounded("taker_ratio", token, source.taker_ratio(token)),
            self.bounded("long_short_ratio", token, source.long_short_ratio(token)),
            self.bounded("top_trader_ratio", token, source.top_trader_ratio(token)),
        );

        RawFeeds {
            spot,
            candles,
            volumes,
            fear_greed,
            open_interest,
            funding,
            taker,
            long_short,
            top_trader,
        }
    }

    /// Applies the per-call timeout, treating elapse as unavailable.
    async fn bounded<T>(
        &self,
        metric: &'static str,
        token: &Token,
        call: impl Future<Output = Option<T>>,
    ) -> Option<T> {
        match tokio::time::timeout(self.call_timeout, call).await {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    metric,
                    token = %token,
                    timeout = ?self.call_timeout,
                    "Provider call timed out, metric unavailable"
                );
                None
            }
        }
    }
}

/// Reconciles settled feeds into a snapshot.
///
/// - price: spot price, else the last candle close
/// - 24h change: spot value, else the change between the last two closes
/// - funding, taker, fear & greed, long/short, top trader: latest point
#[must_use]
pub fn reconcile(token: Token, feeds: RawFeeds) -> MarketSnapshot {
    let spot = feeds.spot.unwrap_or_default();
    let candles = feeds.candles.as_deref().unwrap_or_default();

    let price = spot.price.or_else(|| candles.last().map(|c| c.close));
    let price_change_24h = spot
        .price_change_24h
        .or_else(|| change_from_candles(candles));

    MarketSnapshot {
        token,
        price,
        price_change_24h,
        price_change_7d: spot.price_change_7d,
        volume_24h: spot.volume_24h,
        market_cap: spot.market_cap,
        open_interest: feeds.open_interest,
        funding_rate: feeds.funding.as_deref().and_then(latest_value),
        funding_history: feeds.funding,
        long_short_ratio: feeds.long_short.as_deref().and_then(latest_value),
        top_trader_ratio: feeds.top_trader.as_deref().and_then(latest_value),
        taker_ratio: feeds.taker.as_deref().and_then(latest_value),
        taker_history: feeds.taker,
        fear_greed: feeds.fear_greed.as_deref().and_then(latest_value),
        fear_greed_history: feeds.fear_greed,
        candles: feeds.candles,
        volume_history: feeds.volumes,
    }
}

/// Percent change between the last two candle closes.
///
/// Requires at least two candles and a positive previous close. A change
/// that overflows `Decimal` is treated as unavailable.
#[must_use]
pub fn change_from_candles(candles: &[Candle]) -> Option<f64> {
    let [.., previous, latest] = candles else {
        return None;
    };
    if previous.close <= Decimal::ZERO {
        return None;
    }
    latest
        .close
        .checked_sub(previous.close)?
        .checked_div(previous.close)?
        .checked_mul(Decimal::ONE_HUNDRED)?
        .to_f64()
}
