//! Warning Normalizer
//!
//! Converts raw provider entries into typed [`Warning`]s.

use crate::domain::risk_scoring::value_objects::{RawWarning, Severity, Warning};

/// Maps a type code to a severity when it contains any of `markers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityRule {
    /// Substrings that trigger the rule.
    pub markers: &'static [&'static str],
    /// Severity assigned on match.
    pub severity: Severity,
}

impl SeverityRule {
    /// Whether the rule applies to `kind`.
    #[must_use]
    pub fn matches(&self, kind: &str) -> bool {
        self.markers.iter().any(|marker| kind.contains(marker))
    }
}

/// Severity rules in priority order; the first match wins.
const SEVERITY_RULES: &[SeverityRule] = &[
    SeverityRule {
        markers: &["NOT_SELLABLE"],
        severity: Severity::Critical,
    },
    SeverityRule {
        markers: &["PERMANENT", "FREEZE"],
        severity: Severity::Warning,
    },
];

/// Severity when no rule matches.
const FALLBACK_SEVERITY: Severity = Severity::Info;

/// Warning Normalizer - classifies and cleans raw provider warnings.
#[derive(Debug, Clone, Copy)]
pub struct WarningNormalizer {
    rules: &'static [SeverityRule],
}

impl Default for WarningNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WarningNormalizer {
    /// Create a normalizer with the standard severity rules.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules: SEVERITY_RULES,
        }
    }

    /// Severity rules in evaluation order.
    #[must_use]
    pub const fn rules(&self) -> &'static [SeverityRule] {
        self.rules
    }

    /// Assign a severity tier to a warning type code.
    #[must_use]
    pub fn classify_severity(&self, kind: &str) -> Severity {
        self.rules
            .iter()
            .find(|rule| rule.matches(kind))
            .map_or(FALLBACK_SEVERITY, |rule| rule.severity)
    }

    /// Normalize one raw entry; `None` when it has no usable type code.
    #[must_use]
    pub fn normalize_one(&self, raw: &RawWarning) -> Option<Warning> {
        let kind = raw.kind.as_deref().filter(|kind| !kind.is_empty())?;
        let message = raw
            .message
            .as_deref()
            .filter(|message| !message.is_empty())
            .map_or_else(|| format!("{kind} risk detected"), str::to_string);

        Some(Warning::new(kind, self.classify_severity(kind), message))
    }

    /// Normalize provider entries, dropping malformed ones and keeping order.
    #[must_use]
    pub fn normalize(&self, raw: &[RawWarning]) -> Vec<Warning> {
        raw.iter()
            .filter_map(|entry| {
                let warning = self.normalize_one(entry);
                if warning.is_none() {
                    tracing::debug!(?entry, "Skipping warning entry without type code");
                }
                warning
            })
            .collect()
    }
}
