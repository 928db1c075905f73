mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use common::{build_test_app, get, post_json, StubBackend};

#[tokio::test]
async fn professions_fall_back_to_the_local_catalog() {
    // The stub returns empty catalogs, so the built-in lists serve.
    let app = build_test_app(Arc::new(StubBackend::ok()));

    let (status, body) = get(&app, "/api/v1/catalog/professions").await;
    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 16);
    assert_eq!(items[0]["id"], "product-manager");
    assert_eq!(items[0]["label"], "Product Manager");
}

#[tokio::test]
async fn hobbies_fall_back_to_the_local_catalog() {
    let app = build_test_app(Arc::new(StubBackend::ok()));

    let (status, body) = get(&app, "/api/v1/catalog/hobbies").await;
    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items[0]["id"], "hiking");
}

#[tokio::test]
async fn suggest_relays_backend_suggestions() {
    let app = build_test_app(Arc::new(StubBackend::ok()));

    let (status, body) = get(&app, "/api/v1/suggest?q=product").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!(["Product Manager", "Project Manager"]));
}

#[tokio::test]
async fn suggest_with_blank_query_is_empty() {
    let app = build_test_app(Arc::new(StubBackend::ok()));

    let (status, body) = get(&app, "/api/v1/suggest?q=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));

    let (status, body) = get(&app, "/api/v1/suggest").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn welcome_flag_flips_once_marked() {
    let app = build_test_app(Arc::new(StubBackend::ok()));

    let (status, body) = get(&app, "/api/v1/welcome/client-abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["seen"], false);

    let (status, _) = post_json(&app, "/api/v1/welcome/client-abc/seen", None, json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, "/api/v1/welcome/client-abc").await;
    assert_eq!(body["data"]["seen"], true);

    // Other clients are unaffected.
    let (_, body) = get(&app, "/api/v1/welcome/client-xyz").await;
    assert_eq!(body["data"]["seen"], false);
}
