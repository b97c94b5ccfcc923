use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::response::ApiResponse;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let db_healthy = match state.notes.health().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the store");
            false
        }
    };

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(ApiResponse::success(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    }))
}

/// Mount health check routes (not behind the API-key gate).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
