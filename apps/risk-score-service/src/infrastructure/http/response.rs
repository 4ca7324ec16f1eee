//! HTTP response DTOs.
//!
//! Successful assessments are serialized straight from
//! [`RiskAssessment`](crate::domain::risk_scoring::RiskAssessment); these
//! types cover the remaining bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::risk_scoring::to_iso_millis;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: String,
    /// Current time, ISO-8601 with milliseconds.
    pub timestamp: String,
}

impl HealthResponse {
    /// Healthy response stamped with `now`.
    #[must_use]
    pub fn ok(now: DateTime<Utc>) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: to_iso_millis(&now),
        }
    }
}

/// Body for unknown routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotFoundResponse {
    /// Always `"Not Found"`.
    pub error: String,
    /// Requested path.
    pub path: String,
}

impl NotFoundResponse {
    /// Not-found body for `path`.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            error: "Not Found".to_string(),
            path: path.into(),
        }
    }
}

/// Body for failed assessments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Requested path.
    pub path: String,
    /// Time of failure, ISO-8601 with milliseconds.
    pub timestamp: String,
}

impl ErrorResponse {
    /// Error body for `path` stamped with `now`.
    #[must_use]
    pub fn new(error: impl Into<String>, path: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            error: error.into(),
            path: path.into(),
            timestamp: to_iso_millis(&now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn health_body_shape() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let body = serde_json::to_value(HealthResponse::ok(now)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"status": "ok", "timestamp": "2024-05-01T12:00:00.000Z"})
        );
    }

    #[test]
    fn not_found_body_shape() {
        let body = serde_json::to_value(NotFoundResponse::new("/nope")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"error": "Not Found", "path": "/nope"})
        );
    }

    #[test]
    fn error_body_carries_message_and_path() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let body = ErrorResponse::new("Shield API responded with status 503", "/api/risk-score/M", now);
        assert!(body.error.contains("503"));
        assert_eq!(body.path, "/api/risk-score/M");
        assert_eq!(body.timestamp, "2024-05-01T12:00:00.000Z");
    }
}
