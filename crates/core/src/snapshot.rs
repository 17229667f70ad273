//! Unified market snapshot for a single token.
//!
//! Every field is independently optional: a provider that failed leaves its
//! fields as `None` without invalidating anything else.

use crate::series::{Candle, Series};
use crate::signal::SignalInputs;
use crate::token::Token;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Spot market figures reported by the market-data provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotMarketData {
    /// Current price in USD
    pub price: Option<Decimal>,
    /// 24h price change in percent
    pub price_change_24h: Option<f64>,
    /// 7d price change in percent
    pub price_change_7d: Option<f64>,
    /// 24h traded volume in USD
    pub volume_24h: Option<Decimal>,
    /// Market capitalisation in USD
    pub market_cap: Option<Decimal>,
}

/// Point-in-time view of all metrics for one token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Token the snapshot was assembled for
    pub token: Token,
    /// Current price in USD
    pub price: Option<Decimal>,
    /// 24h price change in percent
    pub price_change_24h: Option<f64>,
    /// 7d price change in percent
    pub price_change_7d: Option<f64>,
    /// 24h traded volume in USD
    pub volume_24h: Option<Decimal>,
    /// Market capitalisation in USD
    pub market_cap: Option<Decimal>,
    /// Latest open interest notional in USD
    pub open_interest: Option<Decimal>,
    /// Latest funding rate (e.g., 0.0001 = 0.01%)
    pub funding_rate: Option<f64>,
    /// Funding rate history
    pub funding_history: Option<Series<f64>>,
    /// Latest global long/short account ratio
    pub long_short_ratio: Option<f64>,
    /// Latest top-trader long/short account ratio
    pub top_trader_ratio: Option<f64>,
    /// Latest taker buy/sell volume ratio
    pub taker_ratio: Option<f64>,
    /// Taker buy/sell ratio history
    pub taker_history: Option<Series<f64>>,
    /// Latest fear & greed index (0-100)
    pub fear_greed: Option<f64>,
    /// Fear & greed index history
    pub fear_greed_history: Option<Series<f64>>,
    /// Price candles
    pub candles: Option<Vec<Candle>>,
    /// Daily traded volume history in USD
    pub volume_history: Option<Series<Decimal>>,
}

impl MarketSnapshot {
    /// Creates a snapshot with every metric unavailable.
    #[must_use]
    pub fn empty(token: Token) -> Self {
        Self {
            token,
            price: None,
            price_change_24h: None,
            price_change_7d: None,
            volume_24h: None,
            market_cap: None,
            open_interest: None,
            funding_rate: None,
            funding_history: None,
            long_short_ratio: None,
            top_trader_ratio: None,
            taker_ratio: None,
            taker_history: None,
            fear_greed: None,
            fear_greed_history: None,
            candles: None,
            volume_history: None,
        }
    }

    /// Extracts the scalars the signal engine scores.
    #[must_use]
    pub fn signal_inputs(&self) -> SignalInputs {
        SignalInputs {
            price_change_24h: self.price_change_24h,
            funding_rate: self.funding_rate,
            taker_ratio: self.taker_ratio,
            fear_greed: self.fear_greed,
        }
    }

    /// Counts the metrics that are available.
    #[must_use]
    pub fn populated_fields(&self) -> usize {
        [
            self.price.is_some(),
            self.price_change_24h.is_some(),
            self.price_change_7d.is_some(),
            self.volume_24h.is_some(),
            self.market_cap.is_some(),
            self.open_interest.is_some(),
            self.funding_rate.is_some(),
            self.funding_history.is_some(),
            self.long_short_ratio.is_some(),
            self.top_trader_ratio.is_some(),
            self.taker_ratio.is_some(),
            self.taker_history.is_some(),
            self.fear_greed.is_some(),
            self.fear_greed_history.is_some(),
            self.candles.is_some(),
            self.volume_history.is_some(),
        ]
        .into_iter()
        .filter(|populated| *populated)
        .count()
    }

    /// Returns true if no metric is available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.populated_fields() == 0
    }
}
