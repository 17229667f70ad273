//! Core types for token market metrics and trading signals.
//!
//! This crate provides:
//! - Token identity and time-series primitives
//! - The unified market snapshot produced by the aggregator
//! - Signal types consumed by the presentation layer
//! - Layered configuration (defaults, TOML, environment)
//! - Text formatting of snapshots

pub mod config;
pub mod config_loader;
pub mod metrics_formatter;
pub mod series;
pub mod signal;
pub mod snapshot;
pub mod token;

pub use config::{AppConfig, ProviderConfig, SearchConfig, WindowConfig};
pub use config_loader::ConfigLoader;
pub use metrics_formatter::MetricsFormatter;
pub use series::{is_ascending, latest_value, sort_ascending, Candle, Series, TimePoint};
pub use signal::{Signal, SignalInputs, SignalLabel};
pub use snapshot::{MarketSnapshot, SpotMarketData};
pub use token::Token;
