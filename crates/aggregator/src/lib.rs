//! Metrics aggregation and dashboard session state.
//!
//! This crate provides:
//! - `MetricsAggregator`: concurrent all-settled fan-out over a
//!   `MarketDataSource`, reconciled into a `MarketSnapshot`
//! - `DashboardSession`: the current token and its latest view, published
//!   whole through a watch channel

pub mod aggregator;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregator::{change_from_candles, reconcile, MetricsAggregator, RawFeeds, DEFAULT_CALL_TIMEOUT};
pub use session::{DashboardSession, DashboardView, SessionState};
