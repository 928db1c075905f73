mod common;

use std::sync::Arc;

use axum::http::StatusCode;

use common::{build_test_app, get, StubBackend};

#[tokio::test]
async fn health_reports_ok_with_reachable_backend() {
    let app = build_test_app(Arc::new(StubBackend::ok()));

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["upstream_healthy"], true);
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn health_degrades_when_backend_is_down() {
    let app = build_test_app(Arc::new(StubBackend::down()));

    let (status, body) = get(&app, "/health").await;
    // The service itself stays up; only the status string degrades.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["upstream_healthy"], false);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = build_test_app(Arc::new(StubBackend::ok()));

    let response = {
        use tower::ServiceExt;
        app.oneshot(
            axum::http::Request::builder()
                .uri("/health")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    };
    assert!(response.headers().contains_key("x-request-id"));
}
