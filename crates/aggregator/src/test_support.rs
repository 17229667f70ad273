//! In-memory market data source for aggregator and session tests.

use async_trait::async_trait;
use market_pulse_core::{Candle, Series, SpotMarketData, TimePoint, Token};
use market_pulse_data::MarketDataSource;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub fn sol() -> Token {
    Token::new("SOL", "solana").with_futures_ticker("SOLUSDT")
}

pub fn btc() -> Token {
    Token::new("BTC", "bitcoin").with_futures_ticker("BTCUSDT")
}

pub fn candle(ts: i64, close: Decimal) -> Candle {
    Candle {
        timestamp_ms: ts,
        open: close,
        high: close,
        low: close,
        close,
    }
}

fn series(values: &[f64]) -> Series<f64> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| TimePoint::new(1_706_659_200_000 + i as i64 * 3_600_000, *v))
        .collect()
}

/// Fake source returning fixed data after an optional delay.
#[derive(Debug, Clone, Default)]
pub struct FakeSource {
    pub spot: Option<SpotMarketData>,
    pub candles: Option<Vec<Candle>>,
    pub volumes: Option<Series<Decimal>>,
    pub fear_greed: Option<Series<f64>>,
    pub open_interest: Option<Decimal>,
    pub funding: Option<Series<f64>>,
    pub taker: Option<Series<f64>>,
    pub long_short: Option<Series<f64>>,
    pub top_trader: Option<Series<f64>>,
    /// Applied to every call
    pub delay: Duration,
    /// Per catalog id, overrides `delay`
    pub token_delays: HashMap<String, Duration>,
    /// Funding history never settles
    pub stall_funding: bool,
    pub calls: Arc<AtomicUsize>,
}

impl FakeSource {
    /// Every metric available with strongly bullish inputs.
    pub fn populated() -> Self {
        Self {
            spot: Some(SpotMarketData {
                price: Some(dec!(150)),
                price_change_24h: Some(8.0),
                price_change_7d: Some(12.0),
                volume_24h: Some(dec!(2500000000)),
                market_cap: Some(dec!(65000000000)),
            }),
            candles: Some(vec![candle(1, dec!(140)), candle(2, dec!(150))]),
            volumes: Some(vec![TimePoint::new(1, dec!(2400000000))]),
            fear_greed: Some(series(&[30.0, 10.0])),
            open_interest: Some(dec!(2100000000)),
            funding: Some(series(&[0.0001, -0.02])),
            taker: Some(series(&[0.9, 1.5])),
            long_short: Some(series(&[2.0])),
            top_trader: Some(series(&[1.1])),
            ..Self::default()
        }
    }

    pub fn with_token_delay(mut self, catalog_id: &str, delay: Duration) -> Self {
        self.token_delays.insert(catalog_id.to_string(), delay);
        self
    }

    async fn wait(&self, token: Option<&Token>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = token
            .and_then(|t| self.token_delays.get(&t.catalog_id).copied())
            .unwrap_or(self.delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl MarketDataSource for FakeSource {
    async fn spot_market_data(&self, token: &Token) -> Option<SpotMarketData> {
        self.wait(Some(token)).await;
        self.spot.clone()
    }

    async fn ohlc(&self, token: &Token) -> Option<Vec<Candle>> {
        self.wait(Some(token)).await;
        self.candles.clone()
    }

    async fn volume_history(&self, token: &Token) -> Option<Series<Decimal>> {
        self.wait(Some(token)).await;
        self.volumes.clone()
    }

    async fn fear_greed(&self) -> Option<Series<f64>> {
        self.wait(None).await;
        self.fear_greed.clone()
    }

    async fn open_interest(&self, token: &Token) -> Option<Decimal> {
        self.wait(Some(token)).await;
        self.open_interest
    }

    async fn funding_history(&self, token: &Token) -> Option<Series<f64>> {
        self.wait(Some(token)).await;
        if self.stall_funding {
            std::future::pending::<()>().await;
        }
        self.funding.clone()
    }

    async fn taker_ratio(&self, token: &Token) -> Option<Series<f64>> {
        self.wait(Some(token)).await;
        self.taker.clone()
    }

    async fn long_short_ratio(&self, token: &Token) -> Option<Series<f64>> {
        self.wait(Some(token)).await;
        self.long_short.clone()
    }

    async fn top_trader_ratio(&self, token: &Token) -> Option<Series<f64>> {
        self.wait(Some(token)).await;
        self.top_trader.clone()
    }
}
