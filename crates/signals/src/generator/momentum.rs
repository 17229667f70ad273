//! Momentum rule.
//!
//! Scores the 24h price change. Strong moves beyond ±5% carry ±30 points,
//! smaller moves ±15.

use crate::rule::{finite, BoundaryPolicy, Contribution, ScoringRule};
use market_pulse_core::SignalInputs;

/// Percent change beyond which momentum is strong.
pub const STRONG_MOVE_PCT: f64 = 5.0;

pub const STRONG_POINTS: i32 = 30;
pub const MODERATE_POINTS: i32 = 15;

/// Scores the 24h price change.
#[derive(Debug, Clone, Copy, Default)]
pub struct MomentumRule {
    policy: BoundaryPolicy,
}

impl MomentumRule {
    #[must_use]
    pub const fn new(policy: BoundaryPolicy) -> Self {
        Self { policy }
    }
}

impl ScoringRule for MomentumRule {
    fn name(&self) -> &'static str {
        "momentum"
    }

    fn max_points(&self) -> i32 {
        STRONG_POINTS
    }

    fn evaluate(&self, inputs: &SignalInputs) -> Option<Contribution> {
        let change = finite(inputs.price_change_24h)?;
        let name = self.name();

        if change > STRONG_MOVE_PCT {
            Some(Contribution::new(name, STRONG_POINTS, "Strong upward momentum"))
        } else if change > 0.0 {
            Some(Contribution::new(name, MODERATE_POINTS, "Positive momentum"))
        } else if change < -STRONG_MOVE_PCT {
            Some(Contribution::new(name, -STRONG_POINTS, "Strong downward momentum"))
        } else if change < 0.0 || self.policy.pivot_is_bearish() {
            Some(Contribution::new(name, -MODERATE_POINTS, "Negative momentum"))
        } else {
            None
        }
    }
}
