//! Scoring rule seam.

use market_pulse_core::SignalInputs;
use serde::{Deserialize, Serialize};

/// How a rule treats an input sitting exactly on its pivot.
///
/// The pivot is `0` for the 24h price change and `1.0` for the taker ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// A pivot value contributes nothing.
    #[default]
    NeutralAtPivot,
    /// A pivot value falls into the moderate negative branch.
    BearishAtPivot,
}

impl BoundaryPolicy {
    /// Returns true if a value equal to the pivot should score bearish.
    #[must_use]
    pub const fn pivot_is_bearish(self) -> bool {
        matches!(self, Self::BearishAtPivot)
    }
}

/// One rule's share of the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contribution {
    /// Name of the rule that produced it
    pub rule: &'static str,
    pub points: i32,
    /// Fixed rationale text
    pub reason: &'static str,
}

impl Contribution {
    #[must_use]
    pub const fn new(rule: &'static str, points: i32, reason: &'static str) -> Self {
        Self {
            rule,
            points,
            reason,
        }
    }
}

/// A pure, additive scoring rule.
///
/// Returns `None` when the rule does not apply: its input is absent or
/// non-finite, or the value sits in the rule's neutral band.
pub trait ScoringRule: Send + Sync {
    /// Rule name used in breakdowns.
    fn name(&self) -> &'static str;

    /// Largest absolute number of points this rule can contribute.
    fn max_points(&self) -> i32;

    fn evaluate(&self, inputs: &SignalInputs) -> Option<Contribution>;
}

/// Drops absent and non-finite inputs.
pub(crate) fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
