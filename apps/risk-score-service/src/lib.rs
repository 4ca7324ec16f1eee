#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Risk Score Service - Token Risk Scoring API
//!
//! An HTTP service that looks up third-party security warnings for a token
//! mint (Jupiter Shield) and turns them into a normalized risk assessment:
//! classified warnings, a weighted score in `[0, 500]` and a coarse level.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Scoring rules with no I/O
//!   - `risk_scoring`: Risk policy, normalizer, aggregator, classifier
//!
//! - **Application**: Use cases and port definitions
//!   - `ports`: Warning provider interface
//!   - `use_cases`: Fetch-and-assess pipeline
//!   - `services`: Optional in-process assessment cache
//!
//! - **Infrastructure**: Adapters and runtime concerns
//!   - `shield`: reqwest client for the Shield API
//!   - `http`: axum REST API
//!   - `config`: Environment configuration
//!   - `telemetry`, `metrics`: Tracing and Prometheus
//!
//! # Data Flow
//!
//! ```text
//! GET /api/risk-score/{mint}
//!   → AssessRiskUseCase
//!       → ShieldClient::fetch_warnings   (GET <shield>?mints=<mint>)
//!       → WarningNormalizer → RiskAggregator → LevelClassifier
//!   → RiskAssessment JSON
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Scoring rules with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain types
pub use domain::risk_scoring::{
    MAX_RISK_SCORE, RawWarning, RiskAssessment, RiskLevel, RiskPolicy, Severity, Warning,
};

// Application
pub use application::{
    AssessRiskUseCase, AssessmentCache, ProviderError, WarningProviderPort,
};

// Infrastructure
pub use infrastructure::config::{ConfigError, ServiceConfig};
pub use infrastructure::http::{AppState, HttpServer, create_router};
pub use infrastructure::metrics::{get_metrics_handle, init_metrics};
pub use infrastructure::shield::{ShieldClient, ShieldError};
