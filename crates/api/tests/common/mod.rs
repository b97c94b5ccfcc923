#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use notes_api::config::ServerConfig;
use notes_api::router::build_app_router;
use notes_api::state::AppState;
use notes_api::views::Views;
use notes_core::gateway::MemoryNoteGateway;
use notes_core::service::NoteService;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Build a test `ServerConfig` with safe defaults and the API-key gate off.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8080".to_string()],
        request_timeout_secs: 30,
        api_key: None,
    }
}

/// A router wired to an in-memory gateway, plus a handle on that gateway
/// for seeding and inspecting state.
pub struct TestApp {
    pub router: Router,
    pub gateway: Arc<MemoryNoteGateway>,
}

pub fn build_test_app() -> TestApp {
    build_test_app_with(test_config())
}

/// Build the full application router with all middleware layers, using the
/// same builder as `main.rs`.
pub fn build_test_app_with(config: ServerConfig) -> TestApp {
    let gateway = Arc::new(MemoryNoteGateway::new());
    let state = AppState {
        notes: NoteService::new(gateway.clone()),
        views: Arc::new(Views::new().expect("templates should compile")),
        config: Arc::new(config.clone()),
    };

    TestApp {
        router: build_app_router(state, &config),
        gateway,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &TestApp, request: Request<Body>) -> Response<Body> {
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

/// GET as a browser would, asking for HTML.
pub async fn get_html(app: &TestApp, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("accept", "text/html")
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

fn form_request(method: &str, uri: &str, body: &str, hx: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", FORM_CONTENT_TYPE);
    if hx {
        builder = builder.header("hx-request", "true");
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn post_form(app: &TestApp, uri: &str, body: &str) -> Response<Body> {
    send(app, form_request("POST", uri, body, false)).await
}

pub async fn post_form_hx(app: &TestApp, uri: &str, body: &str) -> Response<Body> {
    send(app, form_request("POST", uri, body, true)).await
}

pub async fn put_form(app: &TestApp, uri: &str, body: &str) -> Response<Body> {
    send(app, form_request("PUT", uri, body, false)).await
}

pub async fn put_form_hx(app: &TestApp, uri: &str, body: &str) -> Response<Body> {
    send(app, form_request("PUT", uri, body, true)).await
}

pub async fn delete(app: &TestApp, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete_hx(app: &TestApp, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("hx-request", "true")
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
}
