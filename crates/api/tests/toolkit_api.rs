mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use common::{build_test_app, create_session, get, get_with_session, post_json, StubBackend};

#[tokio::test]
async fn demo_toolkit_resolves_without_a_session() {
    let app = build_test_app(Arc::new(StubBackend::ok()));

    let (status, body) = get(&app, "/api/v1/toolkits/kimi-pm-hiker").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["userName"], "Kimi");
    assert_eq!(body["data"]["workContext"], "SaaS Management");
    assert_eq!(body["data"]["lifeContext"], "Outdoor Adventure");
}

#[tokio::test]
async fn unknown_slug_gets_the_empty_state_message() {
    let app = build_test_app(Arc::new(StubBackend::ok()));

    let (status, body) = get(&app, "/api/v1/toolkits/nobody-nothing-nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "This toolkit doesn't exist yet. Create your own!");
}

#[tokio::test]
async fn generated_toolkit_is_resolvable_by_its_slug() {
    let app = build_test_app(Arc::new(StubBackend::ok()));
    let session = create_session(&app).await;
    post_json(
        &app,
        "/api/v1/onboarding/submit",
        Some(&session),
        json!({ "name": "Mary Jane", "profession": "writer", "hobbies": ["reading"] }),
    )
    .await;
    post_json(&app, "/api/v1/generate", Some(&session), json!({})).await;

    // With the generating session.
    let (status, body) =
        get_with_session(&app, "/api/v1/toolkits/mary-jane-writer-reading", &session).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["userName"], "Mary Jane");

    // Shared link, no session: the settled generation still resolves.
    let (status, body) = get(&app, "/api/v1/toolkits/mary-jane-writer-reading").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["lifeTools"][0]["name"], "Blinkist AI");
}
