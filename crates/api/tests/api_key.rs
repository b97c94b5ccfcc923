//! Integration tests for the placeholder `X-API-Key` gate.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    body_json, build_test_app, build_test_app_with, delete_hx, get, get_html, send, test_config,
};

fn gated_app() -> common::TestApp {
    let mut config = test_config();
    config.api_key = Some("test-api-key".to_string());
    build_test_app_with(config)
}

fn get_with_key(uri: &str, key: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-api-key", key)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn gate_disabled_without_configured_key() {
    let app = build_test_app();

    let response = get(&app, "/notes").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_key_is_rejected_for_non_browsers() {
    let app = gated_app();

    let response = get(&app, "/notes").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "API key is required");
}

#[tokio::test]
async fn browsers_pass_without_key() {
    let app = gated_app();

    let response = get_html(&app, "/notes").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn htmx_writes_pass_without_key() {
    let app = gated_app();

    let request = Request::builder()
        .method("POST")
        .uri("/notes")
        .header("content-type", "application/x-www-form-urlencoded")
        .header("accept", "*/*")
        .header("hx-request", "true")
        .body(Body::from("title=Hello"))
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.gateway.len().await, 1);

    let response = delete_hx(&app, "/notes/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(app.gateway.is_empty().await);
}

#[tokio::test]
async fn wrong_key_is_rejected() {
    let app = gated_app();

    let response = send(&app, get_with_key("/notes", "nope")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid API key");
}

#[tokio::test]
async fn matching_key_passes() {
    let app = gated_app();

    let response = send(&app, get_with_key("/notes", "test-api-key")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_is_not_gated() {
    let app = gated_app();

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
}
