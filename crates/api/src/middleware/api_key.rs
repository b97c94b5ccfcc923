//! Placeholder API-key gate.
//!
//! Active only when `API_KEY` is configured. Browsers (which send
//! `Accept: text/html`) and htmx requests from the app's own pages may omit
//! the key. Every other client must present the configured value in
//! `X-API-Key`.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use notes_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::middleware::htmx::{accepts_html, is_hx_request};
use crate::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> AppResult<Response> {
    let Some(expected) = state.config.api_key.as_deref() else {
        return Ok(next.run(request).await);
    };

    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let from_browser = accepts_html(request.headers()) || is_hx_request(request.headers());

    match provided {
        None if from_browser => Ok(next.run(request).await),
        None => Err(AppError::Core(CoreError::Unauthorized(
            "API key is required".into(),
        ))),
        Some(key) if key == expected => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!(path = %request.uri().path(), "Rejected request with invalid API key");
            Err(AppError::Core(CoreError::Unauthorized("Invalid API key".into())))
        }
    }
}
