//! Risk Policy Aggregate

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::risk_scoring::value_objects::Severity;

/// Upper bound of the aggregate score.
pub const MAX_RISK_SCORE: u32 = 500;

/// Standard base weights per warning type code.
const STANDARD_WEIGHTS: [(&str, u32); 15] = [
    // Do not trade
    ("NOT_SELLABLE", 100),
    ("NON_TRANSFERABLE", 90),
    // Authority and fee risks
    ("HAS_PERMANENT_DELEGATE", 80),
    ("HAS_FREEZE_AUTHORITY", 70),
    ("MUTABLE_TRANSFER_FEES", 65),
    ("SUSPICIOUS_DEV_ACTIVITY", 60),
    // Holder concentration
    ("HIGH_SINGLE_OWNERSHIP", 55),
    ("SUSPICIOUS_TOP_HOLDER_ACTIVITY", 55),
    ("HAS_MINT_AUTHORITY", 50),
    ("HIGH_SUPPLY_CONCENTRATION", 45),
    // Informational
    ("VERY_LOW_TRADING_ACTIVITY", 30),
    ("LOW_LIQUIDITY", 25),
    ("NOT_VERIFIED", 20),
    ("LOW_ORGANIC_ACTIVITY", 15),
    ("NEW_LISTING", 10),
];

/// Score multiplier per severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityMultipliers {
    /// Multiplier for `critical` warnings.
    pub critical: f64,
    /// Multiplier for `warning` warnings.
    pub warning: f64,
    /// Multiplier for `info` warnings.
    pub info: f64,
}

impl Default for SeverityMultipliers {
    fn default() -> Self {
        Self {
            critical: 2.0,
            warning: 1.5,
            info: 1.0,
        }
    }
}

impl SeverityMultipliers {
    /// Multiplier for the given tier.
    #[must_use]
    pub const fn for_severity(&self, severity: Severity) -> f64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        }
    }
}

/// Score thresholds separating the risk levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelThresholds {
    /// Minimum score classified as `WARNING`.
    pub warning: u32,
    /// Minimum score classified as `CRITICAL`.
    pub critical: u32,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            warning: 100,
            critical: 200,
        }
    }
}

/// Risk Policy Aggregate - the fixed scoring policy.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPolicy {
    weights: HashMap<String, u32>,
    multipliers: SeverityMultipliers,
    thresholds: LevelThresholds,
    max_score: u32,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl RiskPolicy {
    /// Create a policy from explicit parts.
    #[must_use]
    pub fn new(
        weights: HashMap<String, u32>,
        multipliers: SeverityMultipliers,
        thresholds: LevelThresholds,
    ) -> Self {
        Self {
            weights,
            multipliers,
            thresholds,
            max_score: MAX_RISK_SCORE,
        }
    }

    /// The standard Shield scoring policy.
    #[must_use]
    pub fn standard() -> Self {
        let weights = STANDARD_WEIGHTS
            .iter()
            .map(|(kind, weight)| ((*kind).to_string(), *weight))
            .collect();
        Self::new(
            weights,
            SeverityMultipliers::default(),
            LevelThresholds::default(),
        )
    }

    /// Base weight for a warning type; unknown types weigh 0.
    #[must_use]
    pub fn weight(&self, kind: &str) -> u32 {
        self.weights.get(kind).copied().unwrap_or(0)
    }

    /// Multiplier for a severity tier.
    #[must_use]
    pub const fn multiplier(&self, severity: Severity) -> f64 {
        self.multipliers.for_severity(severity)
    }

    /// Level thresholds.
    #[must_use]
    pub const fn thresholds(&self) -> LevelThresholds {
        self.thresholds
    }

    /// Maximum aggregate score.
    #[must_use]
    pub const fn max_score(&self) -> u32 {
        self.max_score
    }

    /// Number of known warning types.
    #[must_use]
    pub fn known_types(&self) -> usize {
        self.weights.len()
    }
}
