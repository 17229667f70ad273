//! Funding rate rule.
//!
//! Negative funding means shorts pay longs, which is read as bullish.
//! Only rates outside the ±0.01 band contribute.

use crate::rule::{finite, Contribution, ScoringRule};
use market_pulse_core::SignalInputs;

/// Absolute funding rate beyond which the rule fires.
pub const FUNDING_EXTREME: f64 = 0.01;

pub const FUNDING_POINTS: i32 = 25;

/// Scores the latest funding rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FundingRateRule;

impl ScoringRule for FundingRateRule {
    fn name(&self) -> &'static str {
        "funding_rate"
    }

    fn max_points(&self) -> i32 {
        FUNDING_POINTS
    }

    fn evaluate(&self, inputs: &SignalInputs) -> Option<Contribution> {
        let rate = finite(inputs.funding_rate)?;

        if rate < -FUNDING_EXTREME {
            Some(Contribution::new(
                self.name(),
                FUNDING_POINTS,
                "Negative funding (shorts paying longs)",
            ))
        } else if rate > FUNDING_EXTREME {
            Some(Contribution::new(
                self.name(),
                -FUNDING_POINTS,
                "High funding (longs paying shorts)",
            ))
        } else {
            None
        }
    }
}
