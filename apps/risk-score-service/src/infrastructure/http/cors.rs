//! Permissive CORS policy.
//!
//! Every response allows any origin. `OPTIONS` on any path is answered by
//! the layer itself with the preflight headers and never reaches a handler.

use std::time::Duration;

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Preflight cache lifetime in seconds.
pub const PREFLIGHT_MAX_AGE_SECS: u64 = 86_400;

/// CORS layer applied to the whole router.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(PREFLIGHT_MAX_AGE_SECS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, Request, StatusCode};
    use axum::{Router, body::Body, routing::get};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(cors_layer())
    }

    fn listed(headers: &HeaderMap, name: header::HeaderName) -> Vec<String> {
        headers[name]
            .to_str()
            .unwrap()
            .split(',')
            .map(|item| item.trim().to_ascii_lowercase())
            .collect()
    }

    #[tokio::test]
    async fn preflight_is_answered_directly() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/ping")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            listed(headers, header::ACCESS_CONTROL_ALLOW_METHODS),
            ["get", "options"]
        );
        assert_eq!(
            listed(headers, header::ACCESS_CONTROL_ALLOW_HEADERS),
            ["content-type"]
        );
        assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn regular_response_allows_any_origin() {
        let response = app()
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
