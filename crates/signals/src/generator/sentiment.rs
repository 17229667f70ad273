//! Fear & Greed contrarian rule.
//!
//! Extreme fear is read as a buying opportunity and extreme greed as a
//! selling one. Readings in `[25, 75]` contribute nothing.

use crate::rule::{finite, Contribution, ScoringRule};
use market_pulse_core::SignalInputs;

pub const EXTREME_FEAR: f64 = 25.0;
pub const EXTREME_GREED: f64 = 75.0;

pub const SENTIMENT_POINTS: i32 = 20;

/// Scores the latest Fear & Greed index.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentRule;

impl ScoringRule for SentimentRule {
    fn name(&self) -> &'static str {
        "sentiment"
    }

    fn max_points(&self) -> i32 {
        SENTIMENT_POINTS
    }

    fn evaluate(&self, inputs: &SignalInputs) -> Option<Contribution> {
        let index = finite(inputs.fear_greed)?;

        if index < EXTREME_FEAR {
            Some(Contribution::new(
                self.name(),
                SENTIMENT_POINTS,
                "Extreme fear (contrarian buy)",
            ))
        } else if index > EXTREME_GREED {
            Some(Contribution::new(
                self.name(),
                -SENTIMENT_POINTS,
                "Extreme greed (contrarian sell)",
            ))
        } else {
            None
        }
    }
}
