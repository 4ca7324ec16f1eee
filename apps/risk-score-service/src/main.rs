//! Risk Score Service Binary
//!
//! Starts the risk score HTTP API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin risk-score-service
//! ```
//!
//! # Environment Variables
//!
//! All optional:
//! - `RISK_SCORE_HTTP_PORT`: HTTP port (default: 8787)
//! - `RISK_SCORE_BIND_ADDRESS`: Bind address (default: 0.0.0.0)
//! - `SHIELD_API_URL`: Shield endpoint (default: <https://lite-api.jup.ag/ultra/v1/shield>)
//! - `SHIELD_TIMEOUT_MS`: Per-attempt timeout (default: 15000)
//! - `SHIELD_MAX_RETRIES`: Retries for retryable failures (default: 2)
//! - `SHIELD_RETRY_DELAY_MS`: Initial retry backoff (default: 1000)
//! - `RISK_CACHE_CONTROL_MAX_AGE_SECS`: Advertised cache lifetime (default: 300)
//! - `RISK_CACHE_TTL_SECS`: In-process cache TTL, 0 disables (default: 0)
//! - `RISK_CACHE_MAX_ENTRIES`: In-process cache capacity (default: 10000)
//! - `OTEL_ENABLED`: Enable OpenTelemetry export (default: false)
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: OTLP endpoint (default: <http://localhost:4317>)
//! - `OTEL_SERVICE_NAME`: Service name (default: risk-score-service)
//! - `RUST_LOG`: Log filter (default: risk_score_service=info)

use std::sync::Arc;

use risk_score_service::infrastructure::telemetry;
use risk_score_service::{
    AppState, AssessRiskUseCase, AssessmentCache, HttpServer, RiskPolicy, ServiceConfig,
    ShieldClient, create_router, init_metrics,
};
use tokio::signal;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_dotenv();

    // Initialize telemetry (tracing + optional OpenTelemetry)
    let _telemetry_guard = telemetry::init();

    tracing::info!("Starting Risk Score Service");

    // Initialize Prometheus metrics
    if let Err(e) = init_metrics() {
        tracing::warn!(error = %e, "Prometheus recorder unavailable, /metrics disabled");
    }

    let config = ServiceConfig::from_env()?;
    log_config(&config);

    let shutdown_token = CancellationToken::new();

    // Wire the scoring pipeline
    let policy = Arc::new(RiskPolicy::standard());
    let provider = Arc::new(ShieldClient::new(&config.provider)?);
    let mut assess_risk = AssessRiskUseCase::new(provider, policy);
    if config.cache.assessment_cache_enabled() {
        assess_risk = assess_risk.with_cache(Arc::new(AssessmentCache::with_capacity(
            config.cache.assessment_ttl,
            config.cache.max_entries,
        )));
    }

    let state = AppState {
        assess_risk: Arc::new(assess_risk),
        cache_control: config.cache_control(),
    };
    let router = create_router(state);

    let addr = config.server.socket_addr()?;
    let server = HttpServer::new(addr, router, shutdown_token.clone());

    tracing::info!(
        risk_score = %format!("http://{addr}/api/risk-score/{{mint}}"),
        health = %format!("http://{addr}/health"),
        metrics = %format!("http://{addr}/metrics"),
        "Endpoints"
    );

    let mut server_task = tokio::spawn(server.run());

    tokio::select! {
        result = &mut server_task => {
            // Server exited on its own (bind or runtime failure)
            result??;
            return Ok(());
        }
        () = await_shutdown(shutdown_token) => {}
    }

    server_task.await??;

    tracing::info!("Risk Score Service stopped");
    Ok(())
}

/// Log the parsed configuration.
fn log_config(config: &ServiceConfig) {
    tracing::info!(
        bind_address = %config.server.bind_address,
        http_port = config.server.http_port,
        shield_api_url = %config.provider.base_url,
        timeout_ms = config.provider.timeout.as_millis(),
        max_retries = config.provider.max_retries,
        retry_delay_ms = config.provider.retry_delay.as_millis(),
        "Configuration loaded"
    );
    tracing::debug!(
        cache_control = %config.cache_control(),
        assessment_cache_ttl_secs = config.cache.assessment_ttl.as_secs(),
        assessment_cache_max_entries = config.cache.max_entries,
        "Caching"
    );
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT), then cancel the token.
async fn await_shutdown(shutdown_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }

    shutdown_token.cancel();
}
