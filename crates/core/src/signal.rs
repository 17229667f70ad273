//! Trading signal types.
//!
//! A signal is derived from four snapshot scalars and recomputed on every
//! aggregation. It is never updated in place.

use serde::{Deserialize, Serialize};

/// Score above which a signal is a strong buy.
pub const STRONG_BUY_THRESHOLD: i32 = 40;

/// Score above which a signal is a buy.
pub const BUY_THRESHOLD: i32 = 15;

/// Score below which a signal is a sell.
pub const SELL_THRESHOLD: i32 = -15;

/// Score below which a signal is a strong sell.
pub const STRONG_SELL_THRESHOLD: i32 = -40;

/// Composite signal label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalLabel {
    StrongBuy,
    Buy,
    Neutral,
    Sell,
    StrongSell,
}

impl SignalLabel {
    /// Maps a total score to a label.
    ///
    /// `s > 40` strong buy, `15 < s <= 40` buy, `-40 <= s < -15` sell,
    /// `s < -40` strong sell, anything else neutral.
    #[must_use]
    pub const fn from_score(score: i32) -> Self {
        if score > STRONG_BUY_THRESHOLD {
            Self::StrongBuy
        } else if score > BUY_THRESHOLD {
            Self::Buy
        } else if score < STRONG_SELL_THRESHOLD {
            Self::StrongSell
        } else if score < SELL_THRESHOLD {
            Self::Sell
        } else {
            Self::Neutral
        }
    }

    /// Returns the display text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StrongBuy => "STRONG BUY",
            Self::Buy => "BUY",
            Self::Neutral => "NEUTRAL",
            Self::Sell => "SELL",
            Self::StrongSell => "STRONG SELL",
        }
    }

    /// Returns true for either buy label.
    #[must_use]
    pub const fn is_bullish(self) -> bool {
        matches!(self, Self::StrongBuy | Self::Buy)
    }

    /// Returns true for either sell label.
    #[must_use]
    pub const fn is_bearish(self) -> bool {
        matches!(self, Self::StrongSell | Self::Sell)
    }
}

impl std::fmt::Display for SignalLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scalars a signal is computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalInputs {
    /// 24h price change in percent
    pub price_change_24h: Option<f64>,
    /// Latest funding rate
    pub funding_rate: Option<f64>,
    /// Latest taker buy/sell ratio
    pub taker_ratio: Option<f64>,
    /// Latest fear & greed index
    pub fear_greed: Option<f64>,
}

impl SignalInputs {
    /// Creates inputs with all four values present.
    #[must_use]
    pub const fn new(price_change_24h: f64, funding_rate: f64, taker_ratio: f64, fear_greed: f64) -> Self {
        Self {
            price_change_24h: Some(price_change_24h),
            funding_rate: Some(funding_rate),
            taker_ratio: Some(taker_ratio),
            fear_greed: Some(fear_greed),
        }
    }
}

/// Composite trading signal with its rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    /// Label derived from the score
    pub label: SignalLabel,
    /// Sum of all rule contributions
    pub score: i32,
    /// One reason per contributing rule, in evaluation order
    pub reasons: Vec<String>,
}

impl Signal {
    /// Creates a signal from a score and its reasons.
    #[must_use]
    pub fn new(score: i32, reasons: Vec<String>) -> Self {
        Self {
            label: SignalLabel::from_score(score),
            score,
            reasons,
        }
    }

    /// A neutral signal with no contributing rules.
    #[must_use]
    pub fn neutral() -> Self {
        Self::new(0, Vec::new())
    }
}
