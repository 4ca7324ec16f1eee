//! Level Classifier

use crate::domain::risk_scoring::aggregate::LevelThresholds;
use crate::domain::risk_scoring::value_objects::RiskLevel;

/// Level Classifier - maps a score to a [`RiskLevel`].
#[derive(Debug, Clone, Copy)]
pub struct LevelClassifier {
    thresholds: LevelThresholds,
}

impl LevelClassifier {
    /// Create a classifier with the given thresholds.
    #[must_use]
    pub const fn new(thresholds: LevelThresholds) -> Self {
        Self { thresholds }
    }

    /// Classify a score. Total over all `u32` values.
    #[must_use]
    pub const fn classify(&self, score: u32) -> RiskLevel {
        if score >= self.thresholds.critical {
            RiskLevel::Critical
        } else if score >= self.thresholds.warning {
            RiskLevel::Warning
        } else {
            RiskLevel::Info
        }
    }
}

impl Default for LevelClassifier {
    fn default() -> Self {
        Self::new(LevelThresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(0, RiskLevel::Info)]
    #[test_case(10, RiskLevel::Info)]
    #[test_case(99, RiskLevel::Info)]
    #[test_case(100, RiskLevel::Warning)]
    #[test_case(155, RiskLevel::Warning)]
    #[test_case(199, RiskLevel::Warning)]
    #[test_case(200, RiskLevel::Critical)]
    #[test_case(500, RiskLevel::Critical)]
    #[test_case(u32::MAX, RiskLevel::Critical)]
    fn boundaries(score: u32, expected: RiskLevel) {
        assert_eq!(LevelClassifier::default().classify(score), expected);
    }

    proptest! {
        #[test]
        fn monotonic_in_score(a in 0u32..=500, b in 0u32..=500) {
            let classifier = LevelClassifier::default();
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classifier.classify(low) <= classifier.classify(high));
        }
    }
}
