//! Risk assessment payload.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::{RiskLevel, Warning};

/// Result of scoring one mint.
///
/// Built once per request by the
/// [`AssessmentAssembler`](crate::domain::risk_scoring::AssessmentAssembler)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    mint: String,
    score: u32,
    level: RiskLevel,
    warnings: Vec<Warning>,
    #[serde(serialize_with = "serialize_iso_millis")]
    timestamp: DateTime<Utc>,
}

impl RiskAssessment {
    /// Create an assessment from already computed parts.
    #[must_use]
    pub fn new(
        mint: impl Into<String>,
        score: u32,
        level: RiskLevel,
        warnings: Vec<Warning>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            mint: mint.into(),
            score,
            level,
            warnings,
            timestamp,
        }
    }

    /// Mint identifier echoed back to the caller.
    #[must_use]
    pub fn mint(&self) -> &str {
        &self.mint
    }

    /// Aggregate score in `[0, MAX_RISK_SCORE]`.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Level derived from the score.
    #[must_use]
    pub const fn level(&self) -> RiskLevel {
        self.level
    }

    /// Warnings in provider order.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Time the assessment was assembled.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Whether two assessments agree on everything except the timestamp.
    #[must_use]
    pub fn same_outcome(&self, other: &Self) -> bool {
        self.mint == other.mint
            && self.score == other.score
            && self.level == other.level
            && self.warnings == other.warnings
    }
}

/// Format a timestamp as ISO-8601 UTC with millisecond precision
/// (`2026-01-01T00:00:00.000Z`).
#[must_use]
pub fn to_iso_millis(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_iso_millis<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_iso_millis(timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk_scoring::Severity;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 30, 45).unwrap()
    }

    #[test]
    fn serializes_contract_shape() {
        let assessment = RiskAssessment::new(
            "MINT1",
            200,
            RiskLevel::Critical,
            vec![Warning::new(
                "NOT_SELLABLE",
                Severity::Critical,
                "NOT_SELLABLE risk detected",
            )],
            fixed_time(),
        );

        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "mint": "MINT1",
                "score": 200,
                "level": "CRITICAL",
                "warnings": [{
                    "type": "NOT_SELLABLE",
                    "severity": "critical",
                    "message": "NOT_SELLABLE risk detected"
                }],
                "timestamp": "2026-10-16T12:30:45.000Z"
            })
        );
    }

    #[test]
    fn deserializes_own_output() {
        let assessment =
            RiskAssessment::new("MINT2", 10, RiskLevel::Info, Vec::new(), fixed_time());
        let text = serde_json::to_string(&assessment).unwrap();
        let parsed: RiskAssessment = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, assessment);
    }

    #[test]
    fn same_outcome_ignores_timestamp() {
        let a = RiskAssessment::new("M", 0, RiskLevel::Info, Vec::new(), fixed_time());
        let b = RiskAssessment::new("M", 0, RiskLevel::Info, Vec::new(), Utc::now());
        assert!(a.same_outcome(&b));
        assert_ne!(a, b);
    }
}
