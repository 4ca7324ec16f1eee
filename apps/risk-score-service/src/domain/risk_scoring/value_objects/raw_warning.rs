//! Raw provider warning entry.

use serde::{Deserialize, Serialize};

/// A warning entry as reported by the provider, before normalization.
///
/// Both fields are optional because provider payloads are not trusted; the
/// [`WarningNormalizer`](crate::domain::risk_scoring::WarningNormalizer)
/// drops entries without a usable type code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWarning {
    /// Warning type code (e.g. `NOT_SELLABLE`).
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Human-readable description supplied by the provider.
    #[serde(default)]
    pub message: Option<String>,
}

impl RawWarning {
    /// Create an entry with only a type code.
    #[must_use]
    pub fn of_type(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            message: None,
        }
    }

    /// Attach a provider message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Extract an entry from an arbitrary JSON value.
    ///
    /// Non-object values and non-string fields yield empty fields rather
    /// than an error.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        };
        Self {
            kind: field("type"),
            message: field("message"),
        }
    }
}
