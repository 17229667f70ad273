//! Additive signal scoring for token market metrics.
//!
//! Four independent rules score momentum, funding, taker flow and market
//! sentiment. Their points are summed into a score in `[-100, 100]` and
//! mapped to a label.
//!
//! ```
//! use market_pulse_core::{SignalInputs, SignalLabel};
//! use market_pulse_signals::compute_signal;
//!
//! let signal = compute_signal(&SignalInputs::new(8.0, -0.02, 1.5, 10.0));
//! assert_eq!(signal.score, 100);
//! assert_eq!(signal.label, SignalLabel::StrongBuy);
//! ```

pub mod engine;
pub mod generator;
pub mod rule;

pub use engine::{compute_signal, SignalEngine};
pub use generator::{FundingRateRule, MomentumRule, SentimentRule, TakerFlowRule};
pub use rule::{BoundaryPolicy, Contribution, ScoringRule};
