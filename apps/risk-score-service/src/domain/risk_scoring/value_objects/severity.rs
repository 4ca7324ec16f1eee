//! Warning severity tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity tier assigned to a single warning.
///
/// Each tier carries a score multiplier defined by the
/// [`RiskPolicy`](crate::domain::risk_scoring::RiskPolicy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational signal.
    Info,
    /// Elevated risk (freeze or permanent delegate authorities).
    Warning,
    /// Token cannot be sold.
    Critical,
}

impl Severity {
    /// All tiers, lowest first.
    pub const ALL: [Self; 3] = [Self::Info, Self::Warning, Self::Critical];

    /// Wire name of the tier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
        assert_eq!(serde_json::to_string(&Severity::Info).unwrap(), "\"info\"");
    }

    #[test]
    fn display_matches_wire_name() {
        for severity in Severity::ALL {
            assert_eq!(severity.to_string(), severity.as_str());
        }
    }

    #[test]
    fn ordering_is_lowest_first() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Critical);
    }
}
