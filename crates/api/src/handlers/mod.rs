pub mod notes;

use crate::error::AppError;

/// Router fallback: unknown paths get the standard 404 representation.
pub async fn not_found() -> AppError {
    AppError::NoRoute
}
