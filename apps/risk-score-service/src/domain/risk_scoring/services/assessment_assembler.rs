//! Assessment Assembler

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::risk_scoring::aggregate::RiskPolicy;
use crate::domain::risk_scoring::value_objects::{RawWarning, RiskAssessment};

use super::{LevelClassifier, RiskAggregator, WarningNormalizer};

/// Assessment Assembler - runs normalize, aggregate and classify, then
/// builds the [`RiskAssessment`].
#[derive(Debug, Clone)]
pub struct AssessmentAssembler {
    normalizer: WarningNormalizer,
    aggregator: RiskAggregator,
    classifier: LevelClassifier,
}

impl AssessmentAssembler {
    /// Create an assembler for the given policy.
    #[must_use]
    pub fn new(policy: Arc<RiskPolicy>) -> Self {
        let classifier = LevelClassifier::new(policy.thresholds());
        Self {
            normalizer: WarningNormalizer::new(),
            aggregator: RiskAggregator::new(policy),
            classifier,
        }
    }

    /// Score raw provider warnings for `mint` at time `at`.
    ///
    /// The mint is echoed back without validation.
    #[must_use]
    pub fn assemble(&self, mint: &str, raw: &[RawWarning], at: DateTime<Utc>) -> RiskAssessment {
        let warnings = self.normalizer.normalize(raw);
        let score = self.aggregator.score(&warnings);
        let level = self.classifier.classify(score);

        RiskAssessment::new(mint, score, level, warnings, at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk_scoring::value_objects::{RiskLevel, Severity};
    use test_case::test_case;

    fn assembler() -> AssessmentAssembler {
        AssessmentAssembler::new(Arc::new(RiskPolicy::standard()))
    }

    #[test_case(&["NOT_SELLABLE"], 200, RiskLevel::Critical ; "scenario a not sellable")]
    #[test_case(&["NEW_LISTING"], 10, RiskLevel::Info ; "scenario b new listing")]
    #[test_case(&[], 0, RiskLevel::Info ; "scenario c no warnings")]
    #[test_case(&["FOO_BAR"], 0, RiskLevel::Info ; "scenario d unknown type")]
    #[test_case(&["HAS_FREEZE_AUTHORITY", "HAS_MINT_AUTHORITY"], 155, RiskLevel::Warning ; "scenario e freeze and mint")]
    #[test_case(&["NON_TRANSFERABLE", "LOW_LIQUIDITY"], 115, RiskLevel::Warning ; "info tier sums")]
    #[test_case(&["NOT_SELLABLE", "NOT_SELLABLE", "NOT_SELLABLE"], 500, RiskLevel::Critical ; "capped at max")]
    fn scenarios(kinds: &[&str], score: u32, level: RiskLevel) {
        let raw: Vec<RawWarning> = kinds.iter().map(|k| RawWarning::of_type(*k)).collect();
        let assessment = assembler().assemble("MINT", &raw, Utc::now());

        assert_eq!(assessment.score(), score);
        assert_eq!(assessment.level(), level);
        assert_eq!(assessment.warnings().len(), kinds.len());
    }

    #[test]
    fn not_sellable_is_critical_severity() {
        let assessment =
            assembler().assemble("MINT1", &[RawWarning::of_type("NOT_SELLABLE")], Utc::now());
        assert_eq!(assessment.warnings()[0].severity(), Severity::Critical);
    }

    #[test]
    fn echoes_mint_and_timestamp() {
        let at = Utc::now();
        let assessment = assembler().assemble("not a real mint/!", &[], at);
        assert_eq!(assessment.mint(), "not a real mint/!");
        assert_eq!(assessment.timestamp(), at);
    }

    #[test]
    fn identical_input_gives_identical_outcome() {
        let raw = vec![
            RawWarning::of_type("HAS_FREEZE_AUTHORITY"),
            RawWarning::of_type("NEW_LISTING").with_message("listed today"),
        ];
        let assembler = assembler();
        let first = assembler.assemble("MINT", &raw, Utc::now());
        let second = assembler.assemble("MINT", &raw, Utc::now());
        assert!(first.same_outcome(&second));
    }
}
