//! Token identity.
//!
//! A token is identified by its catalog id (the market-data provider's stable
//! identifier). The display symbol is not unique across the token universe,
//! so it never participates in equality.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A selectable token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Display symbol (e.g., "SOL")
    pub symbol: String,
    /// Stable provider-assigned catalog id (e.g., "solana")
    pub catalog_id: String,
    /// Perpetual futures ticker (e.g., "SOLUSDT"), `None` when the token has no derivatives market
    pub futures_ticker: Option<String>,
    /// Human-readable name, when the catalog supplied one
    #[serde(default)]
    pub name: Option<String>,
}

impl Token {
    /// Creates a token without a derivatives market.
    pub fn new(symbol: impl Into<String>, catalog_id: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            catalog_id: catalog_id.into(),
            futures_ticker: None,
            name: None,
        }
    }

    /// Sets the perpetual futures ticker.
    #[must_use]
    pub fn with_futures_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.futures_ticker = Some(ticker.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns true if futures-derived metrics can be fetched for this token.
    #[must_use]
    pub fn has_futures_market(&self) -> bool {
        self.futures_ticker.is_some()
    }

    /// Returns the futures ticker, if any.
    #[must_use]
    pub fn futures_ticker(&self) -> Option<&str> {
        self.futures_ticker.as_deref()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.catalog_id == other.catalog_id
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.catalog_id.hash(state);
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.symbol, self.catalog_id)
    }
}
