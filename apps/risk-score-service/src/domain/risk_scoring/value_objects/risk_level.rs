//! Aggregate risk level.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-tier classification derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Score below the warning threshold.
    Info,
    /// Score between the warning and critical thresholds.
    Warning,
    /// Score at or above the critical threshold.
    Critical,
}

impl RiskLevel {
    /// Wire name of the level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_uppercase() {
        assert_eq!(serde_json::to_string(&RiskLevel::Info).unwrap(), "\"INFO\"");
        assert_eq!(
            serde_json::to_string(&RiskLevel::Warning).unwrap(),
            "\"WARNING\""
        );
        assert_eq!(
            serde_json::to_string(&RiskLevel::Critical).unwrap(),
            "\"CRITICAL\""
        );
    }

    #[test]
    fn round_trips_from_wire_name() {
        let level: RiskLevel = serde_json::from_str("\"WARNING\"").unwrap();
        assert_eq!(level, RiskLevel::Warning);
    }
}
