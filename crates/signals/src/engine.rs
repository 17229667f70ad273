//! Signal engine.
//!
//! Sums the contributions of a fixed list of rules and maps the total to a
//! label. The engine holds no state between calls and performs no I/O.

use crate::generator::{FundingRateRule, MomentumRule, SentimentRule, TakerFlowRule};
use crate::rule::{BoundaryPolicy, Contribution, ScoringRule};
use market_pulse_core::{Signal, SignalInputs};

/// Additive signal engine over an ordered rule list.
pub struct SignalEngine {
    rules: Vec<Box<dyn ScoringRule>>,
    policy: BoundaryPolicy,
}

impl std::fmt::Debug for SignalEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalEngine")
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .field("policy", &self.policy)
            .finish()
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::with_boundary_policy(BoundaryPolicy::default())
    }
}

impl SignalEngine {
    /// Creates the standard engine: momentum, funding, taker flow, sentiment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the standard engine with an explicit pivot policy.
    #[must_use]
    pub fn with_boundary_policy(policy: BoundaryPolicy) -> Self {
        Self {
            rules: vec![
                Box::new(MomentumRule::new(policy)),
                Box::new(FundingRateRule),
                Box::new(TakerFlowRule::new(policy)),
                Box::new(SentimentRule),
            ],
            policy,
        }
    }

    /// Creates an engine without rules.
    #[must_use]
    pub fn empty(policy: BoundaryPolicy) -> Self {
        Self {
            rules: Vec::new(),
            policy,
        }
    }

    /// Builder method to append a rule.
    #[must_use]
    pub fn with_rule(mut self, rule: Box<dyn ScoringRule>) -> Self {
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn boundary_policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Largest absolute score this engine can produce.
    #[must_use]
    pub fn max_score(&self) -> i32 {
        self.rules.iter().map(|r| r.max_points()).sum()
    }

    /// Returns each applicable rule's contribution, in rule order.
    #[must_use]
    pub fn breakdown(&self, inputs: &SignalInputs) -> Vec<Contribution> {
        self.rules.iter().filter_map(|r| r.evaluate(inputs)).collect()
    }

    /// Computes the composite signal.
    #[must_use]
    pub fn compute(&self, inputs: &SignalInputs) -> Signal {
        let contributions = self.breakdown(inputs);
        let score = contributions.iter().map(|c| c.points).sum();
        let reasons = contributions.iter().map(|c| c.reason.to_string()).collect();

        let signal = Signal::new(score, reasons);
        tracing::trace!(score, label = %signal.label, "Signal computed");
        signal
    }
}

/// Computes a signal with the standard rules and the default pivot policy.
#[must_use]
pub fn compute_signal(inputs: &SignalInputs) -> Signal {
    SignalEngine::default().compute(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_pulse_core::SignalLabel;

    // ============================================
    // End-to-end Scenarios
    // ============================================

    #[test]
    fn test_all_bullish() {
        let signal = compute_signal(&SignalInputs::new(8.0, -0.02, 1.5, 10.0));

        assert_eq!(signal.score, 100);
        assert_eq!(signal.label, SignalLabel::StrongBuy);
        assert_eq!(
            signal.reasons,
            vec![
                "Strong upward momentum",
                "Negative funding (shorts paying longs)",
                "Strong buying pressure",
                "Extreme fear (contrarian buy)",
            ]
        );
    }

    #[test]
    fn test_moderate_taker_and_fear_still_max_out() {
        // Strong taker starts above 1.2, extreme fear below 25
        let signal = compute_signal(&SignalInputs::new(8.0, -0.02, 1.3, 15.0));

        assert_eq!(signal.score, 100);
        assert_eq!(signal.label, SignalLabel::StrongBuy);
        assert_eq!(signal.reasons.len(), 4);
        assert_eq!(signal.reasons[2], "Strong buying pressure");
        assert_eq!(signal.reasons[3], "Extreme fear (contrarian buy)");
    }

    #[test]
    fn test_all_bearish() {
        let signal = compute_signal(&SignalInputs::new(-8.0, 0.02, 0.5, 90.0));

        assert_eq!(signal.score, -100);
        assert_eq!(signal.label, SignalLabel::StrongSell);
        assert_eq!(signal.reasons.len(), 4);
        assert_eq!(signal.reasons[0], "Strong downward momentum");
        assert_eq!(signal.reasons[3], "Extreme greed (contrarian sell)");
    }

    #[test]
    fn test_all_absent_is_neutral() {
        let signal = compute_signal(&SignalInputs::default());
        assert_eq!(signal, Signal::neutral());
        assert_eq!(signal.label, SignalLabel::Neutral);
        assert!(signal.reasons.is_empty());
    }

    #[test]
    fn test_non_finite_inputs_ignored() {
        let signal = compute_signal(&SignalInputs::new(f64::NAN, f64::INFINITY, 1.5, f64::NAN));
        assert_eq!(signal.score, 25);
        assert_eq!(signal.reasons, vec!["Strong buying pressure"]);
        assert_eq!(signal.label, SignalLabel::Buy);
    }

    #[test]
    fn test_rules_are_additive() {
        // +15 momentum, 0 funding, -12 taker, +20 fear
        let signal = compute_signal(&SignalInputs::new(2.0, 0.0001, 0.9, 20.0));
        assert_eq!(signal.score, 23);
        assert_eq!(signal.label, SignalLabel::Buy);
        assert_eq!(
            signal.reasons,
            vec![
                "Positive momentum",
                "Moderate selling pressure",
                "Extreme fear (contrarian buy)",
            ]
        );
    }

    // ============================================
    // Label Thresholds
    // ============================================

    #[test]
    fn test_label_boundaries_through_engine() {
        // 15 exactly is neutral
        let signal = compute_signal(&SignalInputs {
            price_change_24h: Some(1.0),
            ..SignalInputs::default()
        });
        assert_eq!(signal.score, 15);
        assert_eq!(signal.label, SignalLabel::Neutral);

        // 40 exactly is buy: +15 momentum +25 funding
        let signal = compute_signal(&SignalInputs {
            price_change_24h: Some(1.0),
            funding_rate: Some(-0.05),
            ..SignalInputs::default()
        });
        assert_eq!(signal.score, 40);
        assert_eq!(signal.label, SignalLabel::Buy);

        // -40 exactly is sell: -15 momentum -25 funding
        let signal = compute_signal(&SignalInputs {
            price_change_24h: Some(-1.0),
            funding_rate: Some(0.05),
            ..SignalInputs::default()
        });
        assert_eq!(signal.score, -40);
        assert_eq!(signal.label, SignalLabel::Sell);
    }

    // ============================================
    // Boundary Policy
    // ============================================

    #[test]
    fn test_pivots_neutral_policy() {
        let inputs = SignalInputs::new(0.0, 0.0, 1.0, 50.0);
        let signal = SignalEngine::with_boundary_policy(BoundaryPolicy::NeutralAtPivot).compute(&inputs);
        assert_eq!(signal.score, 0);
        assert!(signal.reasons.is_empty());
    }

    #[test]
    fn test_pivots_bearish_policy() {
        let inputs = SignalInputs::new(0.0, 0.0, 1.0, 50.0);
        let engine = SignalEngine::with_boundary_policy(BoundaryPolicy::BearishAtPivot);
        let signal = engine.compute(&inputs);

        assert_eq!(signal.score, -27);
        assert_eq!(signal.label, SignalLabel::Sell);
        assert_eq!(
            signal.reasons,
            vec!["Negative momentum", "Moderate selling pressure"]
        );
        assert_eq!(engine.boundary_policy(), BoundaryPolicy::BearishAtPivot);
    }

    // ============================================
    // Engine Properties
    // ============================================

    #[test]
    fn test_score_bounded() {
        let engine = SignalEngine::new();
        assert_eq!(engine.max_score(), 100);

        let values = [-50.0, -5.0, -1.0, 0.0, 0.5, 1.0, 1.2, 5.0, 30.0, 80.0];
        for &a in &values {
            for &b in &[-0.05, -0.01, 0.0, 0.01, 0.05] {
                for &c in &values {
                    for &d in &values {
                        let signal = engine.compute(&SignalInputs::new(a, b, c, d));
                        assert!(signal.score.abs() <= 100);
                        assert_eq!(signal.label, SignalLabel::from_score(signal.score));
                    }
                }
            }
        }
    }

    #[test]
    fn test_deterministic_and_input_untouched() {
        let inputs = SignalInputs::new(3.3, -0.02, 1.1, 60.0);
        let copy = inputs;
        let engine = SignalEngine::new();
        assert_eq!(engine.compute(&inputs), engine.compute(&inputs));
        assert_eq!(inputs, copy);
    }

    #[test]
    fn test_breakdown_matches_signal() {
        let inputs = SignalInputs::new(-8.0, 0.0, 1.3, 80.0);
        let engine = SignalEngine::new();
        let breakdown = engine.breakdown(&inputs);

        let rules: Vec<_> = breakdown.iter().map(|c| c.rule).collect();
        assert_eq!(rules, vec!["momentum", "taker_flow", "sentiment"]);
        let total: i32 = breakdown.iter().map(|c| c.points).sum();
        assert_eq!(total, engine.compute(&inputs).score);
        assert_eq!(total, -25);
    }

    #[test]
    fn test_empty_engine_with_custom_rule() {
        let engine = SignalEngine::empty(BoundaryPolicy::default()).with_rule(Box::new(SentimentRule));
        assert_eq!(engine.rule_count(), 1);
        let signal = engine.compute(&SignalInputs::new(20.0, -1.0, 3.0, 10.0));
        assert_eq!(signal.score, 20);
        assert_eq!(signal.label, SignalLabel::Buy);
    }
}
