//! Persistence gateway abstraction.
//!
//! [`NoteGateway`] is the capability set the service layer needs from a
//! store. Each backend (PostgreSQL in `notes-db`, [`MemoryNoteGateway`] here)
//! implements it; the service only ever sees `Arc<dyn NoteGateway>`.
//!
//! Absence is never an error at this layer: lookups return `None`, and
//! `update`/`delete` on a missing id succeed without touching anything.
//! Turning absence into "not found" is the service's job.

mod memory;

pub use memory::MemoryNoteGateway;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::note::{NewNote, Note};
use crate::types::{DbId, Timestamp};

#[async_trait]
pub trait NoteGateway: Send + Sync {
    /// All notes, newest first. Ties on `created_at` put the later insert first.
    async fn list_all(&self) -> Result<Vec<Note>, StorageError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Note>, StorageError>;

    /// Persist a new note and return the identifier the store assigned.
    async fn insert(&self, note: &NewNote) -> Result<DbId, StorageError>;

    /// Overwrite title and content of `note.id`, stamping `updated_at` with the
    /// current time.
    ///
    /// Returns the stamped timestamp, or `None` when no row matched.
    async fn update(&self, note: &Note) -> Result<Option<Timestamp>, StorageError>;

    /// Remove the note if present. Returns whether a row was removed.
    async fn delete(&self, id: DbId) -> Result<bool, StorageError>;

    /// Cheap connectivity probe.
    async fn ping(&self) -> Result<(), StorageError>;
}
