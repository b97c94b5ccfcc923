//! Handlers for the `/notes` resource.
//!
//! Reads render full pages. Writes answer in one of two ways: a 303 redirect
//! for plain browser submissions, so a refresh never re-posts, or a 200 HTML
//! fragment when the request carries `HX-Request: true` and the client will
//! splice the result into the current page.

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use minijinja::context;
use serde::Deserialize;

use notes_core::error::CoreError;
use notes_core::note::{validate_content, validate_title};
use notes_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::middleware::htmx::HxRequest;
use crate::state::AppState;
use crate::views::{
    NOTES_CREATE, NOTES_EDIT, NOTES_INDEX, NOTES_ROWS, NOTES_SHOW, NOTE_FRAGMENT,
};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// URL-encoded body of create and update requests. Missing fields are empty.
#[derive(Debug, Default, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl NoteForm {
    fn validate(&self) -> AppResult<()> {
        validate_title(&self.title)
            .and_then(|()| validate_content(&self.content))
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))
    }
}

/// Unwrap the form body. A request without a form content type is read as an
/// empty form, so it fails validation like any other missing title.
fn read_form(form: Result<Form<NoteForm>, FormRejection>) -> AppResult<NoteForm> {
    match form {
        Ok(Form(form)) => Ok(form),
        Err(FormRejection::InvalidFormContentType(_)) => Ok(NoteForm::default()),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}

/// Parse the `{id}` path segment.
fn parse_note_id(raw: &str) -> AppResult<DbId> {
    raw.parse::<DbId>()
        .map_err(|_| AppError::BadRequest("Invalid note ID".into()))
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET / and GET /notes
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let notes = state.notes.list().await?;
    state
        .views
        .render(NOTES_INDEX, context! { title => "Notes", notes })
}

/// GET /notes/new
pub async fn new_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    state
        .views
        .render(NOTES_CREATE, context! { title => "Create Note" })
}

/// GET /notes/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_note_id(&raw_id)?;
    let note = state.notes.get(id).await?;
    state
        .views
        .render(NOTES_SHOW, context! { title => &note.title, note })
}

/// GET /notes/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_note_id(&raw_id)?;
    let note = state.notes.get(id).await?;
    let title = format!("Edit {}", note.title);
    state.views.render(NOTES_EDIT, context! { title, note })
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// POST /notes
pub async fn create(
    State(state): State<AppState>,
    HxRequest(partial): HxRequest,
    form: Result<Form<NoteForm>, FormRejection>,
) -> AppResult<Response> {
    let form = read_form(form)?;
    form.validate()?;

    let note = state.notes.create(form.title, form.content).await?;
    tracing::info!(note_id = note.id, partial, "Note created");

    if partial {
        let rows = state
            .views
            .render(NOTES_ROWS, context! { notes => vec![note] })?;
        return Ok(rows.into_response());
    }
    Ok(Redirect::to("/notes").into_response())
}

/// PUT /notes/{id}
pub async fn update(
    State(state): State<AppState>,
    HxRequest(partial): HxRequest,
    Path(raw_id): Path<String>,
    form: Result<Form<NoteForm>, FormRejection>,
) -> AppResult<Response> {
    let id = parse_note_id(&raw_id)?;
    let form = read_form(form)?;
    form.validate()?;

    let note = state.notes.update(id, form.title, form.content).await?;
    tracing::info!(note_id = id, partial, "Note updated");

    if partial {
        let fragment = state
            .views
            .render(NOTE_FRAGMENT, context! { note })?;
        return Ok(fragment.into_response());
    }
    Ok(Redirect::to(&format!("/notes/{id}")).into_response())
}

/// DELETE /notes/{id}
pub async fn delete(
    State(state): State<AppState>,
    HxRequest(partial): HxRequest,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    let id = parse_note_id(&raw_id)?;

    state.notes.delete(id).await?;
    tracing::info!(note_id = id, partial, "Note deleted");

    if partial {
        return Ok(StatusCode::OK.into_response());
    }
    Ok(Redirect::to("/notes").into_response())
}
