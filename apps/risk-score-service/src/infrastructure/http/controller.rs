//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the risk assessment use case.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::any,
};
use chrono::Utc;
use tracing::Instrument;
use uuid::Uuid;

use crate::application::ports::WarningProviderPort;
use crate::application::use_cases::AssessRiskUseCase;
use crate::infrastructure::metrics::{self, RequestOutcome, get_metrics_handle};

use super::cors::cors_layer;
use super::response::{ErrorResponse, HealthResponse, NotFoundResponse};

/// Application state shared across handlers.
pub struct AppState<P>
where
    P: WarningProviderPort,
{
    /// Use case for scoring a mint.
    pub assess_risk: Arc<AssessRiskUseCase<P>>,
    /// `Cache-Control` value sent with successful assessments.
    pub cache_control: String,
}

impl<P> Clone for AppState<P>
where
    P: WarningProviderPort,
{
    fn clone(&self) -> Self {
        Self {
            assess_risk: Arc::clone(&self.assess_risk),
            cache_control: self.cache_control.clone(),
        }
    }
}

const RISK_SCORE_PREFIX: &str = "/api/risk-score/";

/// Create the HTTP router with all endpoints.
///
/// Routes answer every method; `OPTIONS` is intercepted by the CORS layer.
pub fn create_router<P>(state: AppState<P>) -> Router
where
    P: WarningProviderPort + 'static,
{
    Router::new()
        .route("/api/risk-score/{mint}", any(risk_score::<P>))
        .route("/health", any(health_check))
        .route("/metrics", any(metrics_handler))
        .fallback(not_found)
        .with_state(state)
        .layer(cors_layer())
}

/// Risk score endpoint.
///
/// The mint is the raw path segment. It is not percent-decoded, so any
/// byte sequence the router matched is scored as-is.
async fn risk_score<P>(State(state): State<AppState<P>>, uri: Uri) -> Response
where
    P: WarningProviderPort + 'static,
{
    let mint = uri
        .path()
        .strip_prefix(RISK_SCORE_PREFIX)
        .unwrap_or_default()
        .to_owned();
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("risk_score_request", %request_id, %mint);

    async move {
        tracing::info!(path = %uri.path(), "Risk score requested");

        match state.assess_risk.execute(&mint).await {
            Ok(assessment) => {
                metrics::record_request(RequestOutcome::Success);
                metrics::record_assessment(assessment.score(), assessment.level());
                (
                    StatusCode::OK,
                    [(header::CACHE_CONTROL, state.cache_control.clone())],
                    Json(assessment),
                )
                    .into_response()
            }
            Err(e) => {
                metrics::record_request(RequestOutcome::ProviderError);
                tracing::error!(error = %e, "Risk assessment failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new(e.to_string(), uri.path(), Utc::now())),
                )
                    .into_response()
            }
        }
    }
    .instrument(span)
    .await
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse::ok(Utc::now()))
}

async fn metrics_handler() -> impl IntoResponse {
    get_metrics_handle().map_or_else(
        || {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                [("content-type", "text/plain")],
                "Metrics not initialized".to_string(),
            )
        },
        |handle| {
            let body = handle.render();
            (
                StatusCode::OK,
                [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
                body,
            )
        },
    )
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "Route not found");
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse::new(uri.path())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockWarningProviderPort, ProviderError};
    use crate::domain::risk_scoring::{RawWarning, RiskPolicy};
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn router(mock: MockWarningProviderPort) -> Router {
        let assess_risk = Arc::new(AssessRiskUseCase::new(
            Arc::new(mock),
            Arc::new(RiskPolicy::standard()),
        ));
        create_router(AppState {
            assess_risk,
            cache_control: "public, max-age=300".to_string(),
        })
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Value) {
        send(app, "GET", uri).await
    }

    async fn send(
        app: Router,
        method: &str,
        uri: &str,
    ) -> (StatusCode, axum::http::HeaderMap, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, headers, json)
    }

    #[tokio::test]
    async fn risk_score_returns_assessment() {
        let mut mock = MockWarningProviderPort::new();
        mock.expect_fetch_warnings()
            .withf(|mint| mint == "MINT1")
            .returning(|_| Ok(vec![RawWarning::of_type("NOT_SELLABLE")]));

        let (status, headers, body) = get(router(mock), "/api/risk-score/MINT1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=300");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(body["mint"], "MINT1");
        assert_eq!(body["score"], 200);
        assert_eq!(body["level"], "CRITICAL");
        assert_eq!(body["warnings"][0]["type"], "NOT_SELLABLE");
        assert_eq!(body["warnings"][0]["severity"], "critical");
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn provider_failure_is_500_with_status() {
        let mut mock = MockWarningProviderPort::new();
        mock.expect_fetch_warnings()
            .returning(|_| Err(ProviderError::Status { status: 503 }));

        let (status, headers, body) = get(router(mock), "/api/risk-score/MINT").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(headers.get(header::CACHE_CONTROL).is_none());
        assert!(body["error"].as_str().unwrap().contains("503"));
        assert_eq!(body["path"], "/api/risk-score/MINT");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let (status, headers, body) = get(router(MockWarningProviderPort::new()), "/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["path"], "/nope");
    }

    #[tokio::test]
    async fn missing_mint_is_404() {
        let (status, _, _) = get(router(MockWarningProviderPort::new()), "/api/risk-score/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn health_check_returns_ok() {
        let (status, _, body) = get(router(MockWarningProviderPort::new()), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn options_on_route_is_preflight() {
        let response = router(MockWarningProviderPort::new())
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/risk-score/MINT")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let methods: Vec<String> = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap()
            .split(',')
            .map(|m| m.trim().to_ascii_uppercase())
            .collect();
        assert_eq!(methods, ["GET", "OPTIONS"]);
    }

    #[tokio::test]
    async fn undecodable_segment_is_scored_raw() {
        let mut mock = MockWarningProviderPort::new();
        mock.expect_fetch_warnings()
            .withf(|mint| mint == "%FF")
            .returning(|_| Ok(vec![]));

        let (status, headers, body) = get(router(mock), "/api/risk-score/%FF").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        assert_eq!(body["mint"], "%FF");
        assert_eq!(body["score"], 0);
    }

    #[tokio::test]
    async fn invalid_utf8_escape_is_scored_raw() {
        let mut mock = MockWarningProviderPort::new();
        mock.expect_fetch_warnings()
            .withf(|mint| mint == "%C3%28")
            .returning(|_| Ok(vec![RawWarning::of_type("NEW_LISTING")]));

        let (status, _, body) = get(router(mock), "/api/risk-score/%C3%28").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mint"], "%C3%28");
        assert_eq!(body["score"], 10);
    }

    #[tokio::test]
    async fn post_is_scored_like_get() {
        let mut mock = MockWarningProviderPort::new();
        mock.expect_fetch_warnings()
            .withf(|mint| mint == "MINT")
            .returning(|_| Ok(vec![]));

        let (status, headers, body) = send(router(mock), "POST", "/api/risk-score/MINT").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(body["mint"], "MINT");
    }

    #[tokio::test]
    async fn post_to_health_is_json() {
        let (status, _, body) = send(router(MockWarningProviderPort::new()), "POST", "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn post_to_unknown_path_is_json_404() {
        let (status, _, body) = send(router(MockWarningProviderPort::new()), "POST", "/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");
    }
}
