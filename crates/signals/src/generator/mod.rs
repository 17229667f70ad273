//! Scoring rules, one per signal input.
//!
//! Every rule is pure and additive. Rules never see each other's output.

mod funding_rate;
mod momentum;
mod sentiment;
mod taker_flow;

pub use funding_rate::FundingRateRule;
pub use momentum::MomentumRule;
pub use sentiment::SentimentRule;
pub use taker_flow::TakerFlowRule;
