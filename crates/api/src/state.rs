use std::sync::Arc;

use notes_core::service::NoteService;

use crate::config::ServerConfig;
use crate::views::Views;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Note business rules, wrapping the persistence gateway.
    pub notes: NoteService,
    /// Compiled page and fragment templates.
    pub views: Arc<Views>,
    /// Server configuration (read by middleware).
    pub config: Arc<ServerConfig>,
}
