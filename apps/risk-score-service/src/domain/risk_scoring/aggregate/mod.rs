//! Risk Scoring Aggregates

mod risk_policy;

pub use risk_policy::{LevelThresholds, MAX_RISK_SCORE, RiskPolicy, SeverityMultipliers};
