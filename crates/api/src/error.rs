use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use notes_core::error::CoreError;

use crate::response::ApiResponse;

/// Generic message for every 500; details only go to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the JSON error envelope; the
/// [`negotiate_errors`](crate::middleware::errors::negotiate_errors)
/// middleware swaps it for an HTML page when the client wants HTML.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `notes_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A template failed to render.
    #[error("Template error: {0}")]
    Render(#[from] minijinja::Error),

    /// No route matched the request path.
    #[error("No route")]
    NoRoute,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Status and client-safe message of an error response.
///
/// Attached to the response extensions so later middleware can re-render the
/// error in another representation without re-classifying it.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    /// Classify into an HTTP status and a message that is safe to show.
    pub fn report(&self) -> ErrorReport {
        let (status, message) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Storage(err) => {
                    tracing::error!(error = %err, "Storage failure");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        INTERNAL_ERROR_MESSAGE.to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NoRoute => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
            AppError::Render(err) => {
                tracing::error!(error = %err, "Template render failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        ErrorReport { status, message }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let report = self.report();
        let body = ApiResponse::failure(report.message.clone());

        let mut response = (report.status, axum::Json(body)).into_response();
        response.extensions_mut().insert(report);
        response
    }
}
