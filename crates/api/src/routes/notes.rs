//! Route definitions for notes.

use axum::routing::get;
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes, mounted at the service root.
///
/// ```text
/// GET    /                  -> list
/// GET    /notes             -> list
/// POST   /notes             -> create
/// GET    /notes/new         -> new_form
/// GET    /notes/{id}        -> show
/// PUT    /notes/{id}        -> update
/// DELETE /notes/{id}        -> delete
/// GET    /notes/{id}/edit   -> edit_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list))
        .route("/notes", get(notes::list).post(notes::create))
        .route("/notes/new", get(notes::new_form))
        .route(
            "/notes/{id}",
            get(notes::show).put(notes::update).delete(notes::delete),
        )
        .route("/notes/{id}/edit", get(notes::edit_form))
}
