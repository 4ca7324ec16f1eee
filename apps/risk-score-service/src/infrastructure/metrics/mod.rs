//! Prometheus Metrics Module
//!
//! Exposes service metrics in Prometheus format at `GET /metrics`.
//!
//! # Metrics Categories
//!
//! - **Requests**: Risk score requests by outcome
//! - **Assessments**: Score distribution and level counts
//! - **Provider**: Shield fetch latency and retries

use std::sync::OnceLock;
use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

use crate::domain::risk_scoring::RiskLevel;

// =============================================================================
// Global Metrics Handle
// =============================================================================

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder, or return the existing handle.
///
/// # Errors
///
/// Returns an error if another global recorder is already installed.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    if let Some(handle) = PROMETHEUS_HANDLE.get() {
        return Ok(handle.clone());
    }

    let handle = PrometheusBuilder::new().install_recorder()?;
    register_metrics();
    Ok(PROMETHEUS_HANDLE.get_or_init(|| handle).clone())
}

/// Get the Prometheus handle for rendering metrics.
///
/// Returns `None` if metrics have not been initialized.
#[must_use]
pub fn get_metrics_handle() -> Option<PrometheusHandle> {
    PROMETHEUS_HANDLE.get().cloned()
}

// =============================================================================
// Metric Registration
// =============================================================================

fn register_metrics() {
    describe_counter!(
        "risk_score_requests_total",
        "Risk score requests by outcome"
    );
    describe_histogram!(
        "risk_score_assessment_score",
        "Distribution of computed risk scores"
    );
    describe_counter!(
        "risk_score_assessments_total",
        "Completed assessments by risk level"
    );
    describe_histogram!(
        "risk_score_provider_fetch_seconds",
        "Shield API fetch latency including retries"
    );
    describe_counter!(
        "risk_score_provider_retries_total",
        "Shield API retry attempts"
    );
}

// =============================================================================
// Metric Recording Functions
// =============================================================================

/// Outcome label for risk score requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Assessment returned.
    Success,
    /// Provider call failed.
    ProviderError,
}

impl RequestOutcome {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::ProviderError => "provider_error",
        }
    }
}

/// Record a finished risk score request.
pub fn record_request(outcome: RequestOutcome) {
    counter!(
        "risk_score_requests_total",
        "outcome" => outcome.as_str()
    )
    .increment(1);
}

/// Record a computed assessment.
pub fn record_assessment(score: u32, level: RiskLevel) {
    histogram!("risk_score_assessment_score").record(f64::from(score));
    counter!(
        "risk_score_assessments_total",
        "level" => level.as_str()
    )
    .increment(1);
}

/// Record how long a provider fetch took.
pub fn record_provider_fetch(duration: Duration, success: bool) {
    histogram!(
        "risk_score_provider_fetch_seconds",
        "result" => if success { "ok" } else { "error" }
    )
    .record(duration.as_secs_f64());
}

/// Record a provider retry.
pub fn record_provider_retry(reason: &str) {
    counter!(
        "risk_score_provider_retries_total",
        "reason" => reason.to_string()
    )
    .increment(1);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_outcome_as_str() {
        assert_eq!(RequestOutcome::Success.as_str(), "success");
        assert_eq!(RequestOutcome::ProviderError.as_str(), "provider_error");
    }

    #[test]
    fn recording_without_recorder_is_a_noop() {
        record_request(RequestOutcome::Success);
        record_assessment(155, RiskLevel::Warning);
        record_provider_fetch(Duration::from_millis(20), true);
        record_provider_retry("503");
    }
}
