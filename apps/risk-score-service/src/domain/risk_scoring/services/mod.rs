//! Risk Scoring Domain Services
//!
//! Stateless steps of the scoring pipeline, leaf-first.

mod assessment_assembler;
mod level_classifier;
mod risk_aggregator;
mod warning_normalizer;

pub use assessment_assembler::AssessmentAssembler;
pub use level_classifier::LevelClassifier;
pub use risk_aggregator::RiskAggregator;
pub use warning_normalizer::{SeverityRule, WarningNormalizer};
