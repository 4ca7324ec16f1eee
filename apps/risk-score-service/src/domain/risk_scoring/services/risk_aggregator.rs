//! Risk Aggregator
//!
//! Sums weighted warning contributions into a single score.

use std::sync::Arc;

use crate::domain::risk_scoring::aggregate::RiskPolicy;
use crate::domain::risk_scoring::value_objects::Warning;

/// Risk Aggregator - weighted sum of warnings under a [`RiskPolicy`].
#[derive(Debug, Clone)]
pub struct RiskAggregator {
    policy: Arc<RiskPolicy>,
}

impl RiskAggregator {
    /// Create an aggregator for the given policy.
    #[must_use]
    pub const fn new(policy: Arc<RiskPolicy>) -> Self {
        Self { policy }
    }

    /// Contribution of a single warning before rounding.
    #[must_use]
    pub fn contribution(&self, warning: &Warning) -> f64 {
        f64::from(self.policy.weight(warning.kind())) * self.policy.multiplier(warning.severity())
    }

    /// Aggregate score: rounded weighted sum clamped to `[0, max_score]`.
    #[must_use]
    pub fn score(&self, warnings: &[Warning]) -> u32 {
        let total: f64 = warnings.iter().map(|w| self.contribution(w)).sum();
        let max = f64::from(self.policy.max_score());

        // Every term is non-negative, so only the upper bound can bite.
        total.round().clamp(0.0, max) as u32
    }
}
