//! HTTP client for the Shield API with retry logic.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde_json::Value;

use super::error::ShieldError;
use crate::application::ports::{ProviderError, WarningProviderPort};
use crate::domain::risk_scoring::RawWarning;
use crate::infrastructure::config::ProviderSettings;
use crate::infrastructure::metrics;

/// Upper bound for any single retry delay, including `Retry-After`.
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Shield API client.
#[derive(Debug, Clone)]
pub struct ShieldClient {
    client: Client,
    base_url: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl ShieldClient {
    /// Create a new client from settings.
    ///
    /// # Errors
    ///
    /// Returns `ShieldError::Client` if the reqwest client cannot be built.
    pub fn new(settings: &ProviderSettings) -> Result<Self, ShieldError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("risk-score-service/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ShieldError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            max_retries: settings.max_retries,
            retry_delay: settings.retry_delay,
        })
    }

    /// Fetch and parse the warnings for `mint`.
    ///
    /// # Errors
    ///
    /// Returns the last failure once retries are exhausted, or immediately
    /// for non-retryable statuses and unparseable bodies.
    pub async fn fetch(&self, mint: &str) -> Result<Vec<RawWarning>, ShieldError> {
        let body = self.request(mint).await?;
        tracing::debug!(body = %body, "Shield API response");
        let value: Value =
            serde_json::from_str(&body).map_err(|e| ShieldError::JsonParse(e.to_string()))?;
        Ok(extract_warnings(&value, mint))
    }

    /// Internal request implementation with retry logic.
    async fn request(&self, mint: &str) -> Result<String, ShieldError> {
        let mut backoff = ExponentialBackoff::new(self.max_retries, self.retry_delay);
        tracing::debug!(url = %self.base_url, mint, "Requesting Shield warnings");

        loop {
            let response = match self
                .client
                .get(&self.base_url)
                .query(&[("mints", mint)])
                .header(header::ACCEPT, "application/json")
                .send()
                .await
            {
                Ok(resp) => resp,
                Err(e) => {
                    if let Some(delay) = backoff.next_backoff() {
                        tracing::warn!(
                            error = %e,
                            delay_ms = delay.as_millis(),
                            attempt = backoff.attempt,
                            "Network error, retrying"
                        );
                        metrics::record_provider_retry("network");
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(ShieldError::Network(e.to_string()));
                }
            };

            let status = response.status();

            if status.is_success() {
                return response
                    .text()
                    .await
                    .map_err(|e| ShieldError::Network(e.to_string()));
            }

            let retry_after = response
                .headers()
                .get(header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs);

            let delay = match categorize_status(status) {
                ErrorCategory::RateLimited => backoff
                    .next_backoff()
                    .map(|delay| retry_after.map_or(delay, |after| after.min(MAX_BACKOFF))),
                ErrorCategory::Retryable => backoff.next_backoff(),
                ErrorCategory::NonRetryable => None,
            };

            let Some(delay) = delay else {
                return Err(ShieldError::Status {
                    status: status.as_u16(),
                });
            };

            tracing::warn!(
                status = status.as_u16(),
                delay_ms = delay.as_millis(),
                attempt = backoff.attempt,
                "Retryable status from Shield API, retrying"
            );
            metrics::record_provider_retry(status.as_str());
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl WarningProviderPort for ShieldClient {
    async fn fetch_warnings(&self, mint: &str) -> Result<Vec<RawWarning>, ProviderError> {
        let started = Instant::now();
        let result = self.fetch(mint).await;
        metrics::record_provider_fetch(started.elapsed(), result.is_ok());

        match &result {
            Ok(warnings) => tracing::debug!(count = warnings.len(), "Fetched Shield warnings"),
            Err(e) => tracing::warn!(error = %e, "Shield fetch failed"),
        }

        result.map_err(ProviderError::from)
    }
}

/// Pull `warnings.<mint>` out of a Shield response body.
///
/// Anything other than an array at that position means no warnings.
fn extract_warnings(body: &Value, mint: &str) -> Vec<RawWarning> {
    body.get("warnings")
        .and_then(|warnings| warnings.get(mint))
        .and_then(Value::as_array)
        .map(|entries| entries.iter().map(RawWarning::from_json).collect())
        .unwrap_or_default()
}

/// Error category for determining retry behavior.
enum ErrorCategory {
    RateLimited,
    Retryable,
    NonRetryable,
}

/// Categorize HTTP status code for retry handling.
const fn categorize_status(status: StatusCode) -> ErrorCategory {
    match status.as_u16() {
        429 => ErrorCategory::RateLimited,
        408 | 500 | 502 | 503 | 504 => ErrorCategory::Retryable,
        _ => ErrorCategory::NonRetryable,
    }
}

/// Exponential backoff calculator.
struct ExponentialBackoff {
    attempt: u32,
    max_retries: u32,
    current_backoff: Duration,
}

impl ExponentialBackoff {
    const fn new(max_retries: u32, initial_backoff: Duration) -> Self {
        Self {
            attempt: 0,
            max_retries,
            current_backoff: initial_backoff,
        }
    }

    fn next_backoff(&mut self) -> Option<Duration> {
        if self.attempt >= self.max_retries {
            return None;
        }
        self.attempt += 1;

        let backoff = self.current_backoff.min(MAX_BACKOFF);
        self.current_backoff = self.current_backoff.saturating_mul(2);

        Some(backoff)
    }
}
