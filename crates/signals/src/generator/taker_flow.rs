//! Taker flow rule.
//!
//! Scores aggressive buy volume against aggressive sell volume.

use crate::rule::{finite, BoundaryPolicy, Contribution, ScoringRule};
use market_pulse_core::SignalInputs;

pub const STRONG_BUY_RATIO: f64 = 1.2;
pub const STRONG_SELL_RATIO: f64 = 0.8;
/// Ratio at which buy and sell volume balance.
pub const PIVOT_RATIO: f64 = 1.0;

pub const STRONG_POINTS: i32 = 25;
pub const MODERATE_POINTS: i32 = 12;

/// Scores the latest taker buy/sell ratio.
#[derive(Debug, Clone, Copy, Default)]
pub struct TakerFlowRule {
    policy: BoundaryPolicy,
}

impl TakerFlowRule {
    #[must_use]
    pub const fn new(policy: BoundaryPolicy) -> Self {
        Self { policy }
    }
}

impl ScoringRule for TakerFlowRule {
    fn name(&self) -> &'static str {
        "taker_flow"
    }

    fn max_points(&self) -> i32 {
        STRONG_POINTS
    }

    fn evaluate(&self, inputs: &SignalInputs) -> Option<Contribution> {
        let ratio = finite(inputs.taker_ratio)?;
        let name = self.name();

        if ratio > STRONG_BUY_RATIO {
            Some(Contribution::new(name, STRONG_POINTS, "Strong buying pressure"))
        } else if ratio > PIVOT_RATIO {
            Some(Contribution::new(name, MODERATE_POINTS, "Moderate buying pressure"))
        } else if ratio < STRONG_SELL_RATIO {
            Some(Contribution::new(name, -STRONG_POINTS, "Strong selling pressure"))
        } else if ratio < PIVOT_RATIO || self.policy.pivot_is_bearish() {
            Some(Contribution::new(name, -MODERATE_POINTS, "Moderate selling pressure"))
        } else {
            None
        }
    }
}
