//! Risk Scoring Bounded Context
//!
//! Turns third-party token warnings into a single score and level.
//!
//! # Key Concepts
//!
//! - **Risk Policy**: Weight table, severity multipliers and level thresholds
//! - **Normalization**: Raw provider entries become typed [`Warning`]s
//! - **Aggregation**: Weighted sum of warnings, rounded and clamped
//! - **Classification**: Score mapped to [`RiskLevel`]

pub mod aggregate;
pub mod services;
pub mod value_objects;

pub use aggregate::{LevelThresholds, MAX_RISK_SCORE, RiskPolicy, SeverityMultipliers};
pub use services::{
    AssessmentAssembler, LevelClassifier, RiskAggregator, SeverityRule, WarningNormalizer,
};
pub use value_objects::{RawWarning, RiskAssessment, RiskLevel, Severity, Warning, to_iso_millis};
