//! Template rendering.
//!
//! Templates live as standalone files under `crates/api/templates` and are
//! embedded at compile time. Names ending in `.html` are auto-escaped.
//! Names starting with `_` (or under `partials/`) are fragments meant to be
//! spliced into an existing page; the rest are full pages extending
//! `layout.html`.

use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

use crate::error::AppResult;

pub const LAYOUT: &str = "layout.html";
pub const NOTES_INDEX: &str = "notes/index.html";
pub const NOTES_CREATE: &str = "notes/create.html";
pub const NOTES_SHOW: &str = "notes/show.html";
pub const NOTES_EDIT: &str = "notes/edit.html";
/// List rows, used both by the index page and as the create fragment.
pub const NOTES_ROWS: &str = "notes/_rows.html";
/// Single note body, used both by the show page and as the update fragment.
pub const NOTE_FRAGMENT: &str = "notes/_note.html";
pub const ERROR_PAGE: &str = "error.html";
pub const ERROR_FRAGMENT: &str = "partials/error.html";

const TEMPLATES: &[(&str, &str)] = &[
    (LAYOUT, include_str!("../templates/layout.html")),
    (NOTES_INDEX, include_str!("../templates/notes/index.html")),
    (NOTES_CREATE, include_str!("../templates/notes/create.html")),
    (NOTES_SHOW, include_str!("../templates/notes/show.html")),
    (NOTES_EDIT, include_str!("../templates/notes/edit.html")),
    (NOTES_ROWS, include_str!("../templates/notes/_rows.html")),
    (NOTE_FRAGMENT, include_str!("../templates/notes/_note.html")),
    (ERROR_PAGE, include_str!("../templates/error.html")),
    (ERROR_FRAGMENT, include_str!("../templates/partials/error.html")),
];

/// Compiled template environment shared by all handlers.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    /// Compile every embedded template. Fails on syntax errors.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        env.add_filter("datetime", datetime);
        Ok(Self { env })
    }

    /// Render the template `name` with `ctx`.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> AppResult<Html<String>> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(ctx)?))
    }
}

/// Format an RFC 3339 timestamp for display. Unparsable input is returned as is.
fn datetime(value: String) -> String {
    chrono::DateTime::parse_from_rfc3339(&value)
        .map(|ts| ts.format("%b %d, %Y %H:%M").to_string())
        .unwrap_or(value)
}
