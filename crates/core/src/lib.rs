//! Domain layer for the notes application.
//!
//! Holds the [`note::Note`] entity, the [`gateway::NoteGateway`] persistence
//! abstraction and the [`service::NoteService`] business rules. Nothing in
//! here knows about HTTP or about a particular database.

pub mod error;
pub mod gateway;
pub mod note;
pub mod service;
pub mod types;
