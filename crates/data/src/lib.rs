//! Market data provider clients for spot, sentiment and derivatives metrics.
//!
//! This crate provides:
//! - CoinGecko client (search, OHLC, volume history, spot market data)
//! - Fear & Greed index client
//! - Binance futures statistics client (open interest, funding, ratios)
//! - The `MarketDataSource` and `TokenSearch` seams used by the aggregator
//!
//! Clients return `Result<_, ProviderError>`; the `ProviderSet` implementation
//! of `MarketDataSource` turns every failure into an unavailable metric.

pub mod binance_futures;
pub mod coingecko;
pub mod error;
pub mod fear_greed;
pub mod http;
pub mod parse;
pub mod period;
pub mod source;

pub use binance_futures::{BinanceFuturesClient, BINANCE_FUTURES_API_URL};
pub use coingecko::{CoinGeckoClient, COINGECKO_API_URL};
pub use error::{ProviderError, Result};
pub use fear_greed::{FearGreedClient, FEAR_GREED_API_URL};
pub use http::HttpClient;
pub use period::{ParsePeriodError, Period};
pub use source::{MarketDataSource, ProviderSet, TokenSearch, Windows};
