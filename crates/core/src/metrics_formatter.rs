#![allow(clippy::format_push_string)]

use crate::signal::Signal;
use crate::snapshot::MarketSnapshot;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Placeholder shown for an unavailable metric.
pub const MISSING: &str = "--";

pub struct MetricsFormatter;

impl MetricsFormatter {
    #[must_use]
    pub fn format(snapshot: &MarketSnapshot, signal: &Signal) -> String {
        let token = &snapshot.token;
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        match &token.name {
            Some(name) => output.push_str(&format!("  {} / USD  ·  {}\n", token.symbol, name)),
            None => output.push_str(&format!("  {} / USD\n", token.symbol)),
        }
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str(&format!(
            "Price:                 {}  {}\n",
            Self::format_price(snapshot.price),
            Self::format_change(snapshot.price_change_24h)
        ));
        output.push('\n');

        // Signal
        output.push_str("Trading Signal\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!("Signal:                {}\n", signal.label));
        output.push_str(&format!("Confidence Score:      {}\n", signal.score));
        for reason in &signal.reasons {
            output.push_str(&format!("  • {reason}\n"));
        }
        output.push('\n');

        // Derivatives
        output.push_str("Derivatives");
        if !token.has_futures_market() {
            output.push_str(" (no futures market)");
        }
        output.push('\n');
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "Open Interest:         {}\n",
            Self::format_usd(snapshot.open_interest)
        ));
        output.push_str(&format!(
            "Funding Rate:          {}\n",
            Self::format_funding(snapshot.funding_rate)
        ));
        output.push_str(&format!(
            "Long/Short:            {}\n",
            Self::format_ratio(snapshot.long_short_ratio)
        ));
        output.push_str(&format!(
            "Top Traders L/S:       {}\n",
            Self::format_ratio(snapshot.top_trader_ratio)
        ));
        output.push_str(&format!(
            "Taker Buy/Sell:        {}\n",
            Self::format_ratio(snapshot.taker_ratio)
        ));
        output.push('\n');

        // Market
        output.push_str("Market\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "Fear & Greed:          {}\n",
            Self::format_index(snapshot.fear_greed)
        ));
        output.push_str(&format!(
            "Volume 24h:            {}\n",
            Self::format_usd(snapshot.volume_24h)
        ));
        output.push_str(&format!(
            "Market Cap:            {}\n",
            Self::format_usd(snapshot.market_cap)
        ));
        output.push_str(&format!(
            "7d Change:             {}\n",
            Self::format_change(snapshot.price_change_7d)
        ));
        output.push('\n');

        // Series coverage
        output.push_str("History\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "Candles:               {}\n",
            Self::format_count(snapshot.candles.as_ref().map(Vec::len))
        ));
        output.push_str(&format!(
            "Volume points:         {}\n",
            Self::format_count(snapshot.volume_history.as_ref().map(Vec::len))
        ));
        output.push_str(&format!(
            "Funding events:        {}\n",
            Self::format_count(snapshot.funding_history.as_ref().map(Vec::len))
        ));
        output.push_str(&format!(
            "Taker ratio points:    {}\n",
            Self::format_count(snapshot.taker_history.as_ref().map(Vec::len))
        ));
        output.push_str(&format!(
            "Fear & Greed days:     {}\n",
            Self::format_count(snapshot.fear_greed_history.as_ref().map(Vec::len))
        ));

        output
    }

    /// Formats a USD amount with a T/B/M/K suffix.
    #[must_use]
    pub fn format_usd(value: Option<Decimal>) -> String {
        let Some(n) = value.and_then(|v| v.to_f64()) else {
            return MISSING.to_string();
        };
        if !n.is_finite() {
            return MISSING.to_string();
        }

        if n >= 1e12 {
            format!("${:.2}T", n / 1e12)
        } else if n >= 1e9 {
            format!("${:.2}B", n / 1e9)
        } else if n >= 1e6 {
            format!("${:.2}M", n / 1e6)
        } else if n >= 1e3 {
            format!("${:.2}K", n / 1e3)
        } else {
            format!("${n:.2}")
        }
    }

    /// Formats a price, keeping precision for sub-cent tokens.
    #[must_use]
    pub fn format_price(value: Option<Decimal>) -> String {
        match value {
            Some(price) if price >= Decimal::ONE => format!("${:.2}", price),
            Some(price) => format!("${}", price.round_sf(4).unwrap_or(price).normalize()),
            None => MISSING.to_string(),
        }
    }

    /// Formats a funding rate as a percentage with four decimals.
    #[must_use]
    pub fn format_funding(value: Option<f64>) -> String {
        match value {
            Some(rate) if rate.is_finite() => format!("{:.4}%", rate * 100.0),
            _ => MISSING.to_string(),
        }
    }

    /// Formats a ratio with two decimals.
    #[must_use]
    pub fn format_ratio(value: Option<f64>) -> String {
        match value {
            Some(ratio) if ratio.is_finite() => format!("{ratio:.2}"),
            _ => MISSING.to_string(),
        }
    }

    /// Formats a signed percentage change.
    #[must_use]
    pub fn format_change(value: Option<f64>) -> String {
        match value {
            Some(change) if change.is_finite() => {
                let sign = if change > 0.0 { "+" } else { "" };
                format!("{sign}{change:.2}%")
            }
            _ => MISSING.to_string(),
        }
    }

    /// Formats the fear & greed index as a rounded integer.
    #[must_use]
    pub fn format_index(value: Option<f64>) -> String {
        match value {
            Some(index) if index.is_finite() => format!("{}", index.round()),
            _ => MISSING.to_string(),
        }
    }

    fn format_count(len: Option<usize>) -> String {
        len.map_or_else(|| MISSING.to_string(), |n| n.to_string())
    }
}
