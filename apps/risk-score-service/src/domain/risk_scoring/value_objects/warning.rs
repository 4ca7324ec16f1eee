//! Normalized warning.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Severity;

/// A single risk signal about a mint with its assigned severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    #[serde(rename = "type")]
    kind: String,
    severity: Severity,
    message: String,
}

impl Warning {
    /// Create a new warning.
    #[must_use]
    pub fn new(kind: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            severity,
            message: message.into(),
        }
    }

    /// Warning type code.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Assigned severity tier.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Message shown to the caller.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.kind, self.message)
    }
}
