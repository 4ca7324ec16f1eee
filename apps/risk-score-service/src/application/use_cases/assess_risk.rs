//! Assess Risk Use Case

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::ports::{ProviderError, WarningProviderPort};
use crate::application::services::AssessmentCache;
use crate::domain::risk_scoring::{AssessmentAssembler, RawWarning, RiskAssessment, RiskPolicy};

/// Use case for scoring a single mint.
///
/// Pipeline: fetch raw warnings → normalize → aggregate → classify → assemble.
pub struct AssessRiskUseCase<P>
where
    P: WarningProviderPort,
{
    provider: Arc<P>,
    assembler: AssessmentAssembler,
    cache: Option<Arc<AssessmentCache>>,
}

impl<P> AssessRiskUseCase<P>
where
    P: WarningProviderPort,
{
    /// Create a new AssessRiskUseCase.
    pub fn new(provider: Arc<P>, policy: Arc<RiskPolicy>) -> Self {
        Self {
            provider,
            assembler: AssessmentAssembler::new(policy),
            cache: None,
        }
    }

    /// Serve repeat requests from `cache` while entries are fresh.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<AssessmentCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Execute the use case.
    ///
    /// Provider failures are returned as-is; nothing partial is produced.
    #[tracing::instrument(name = "assess_risk", skip(self))]
    pub async fn execute(&self, mint: &str) -> Result<RiskAssessment, ProviderError> {
        if let Some(cached) = self.cache.as_ref().and_then(|cache| cache.get(mint)) {
            tracing::debug!(score = cached.score(), "Serving cached assessment");
            return Ok(cached);
        }

        let raw = self.provider.fetch_warnings(mint).await?;
        let assessment = self.assess(mint, &raw, Utc::now());

        tracing::info!(
            score = assessment.score(),
            level = %assessment.level(),
            warnings = assessment.warnings().len(),
            "Risk assessment computed"
        );

        if let Some(cache) = &self.cache {
            cache.insert(assessment.clone());
        }

        Ok(assessment)
    }

    /// Score already fetched provider output.
    #[must_use]
    pub fn assess(&self, mint: &str, raw: &[RawWarning], at: DateTime<Utc>) -> RiskAssessment {
        self.assembler.assemble(mint, raw, at)
    }
}
