use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::NoteGateway;
use crate::error::StorageError;
use crate::note::{NewNote, Note};
use crate::types::{now, DbId, Timestamp};

#[derive(Debug)]
struct MemoryState {
    next_id: DbId,
    notes: BTreeMap<DbId, Note>,
}

/// In-process gateway used by tests and local experiments.
///
/// Ids start at 1 and are never reused, matching BIGSERIAL semantics.
#[derive(Debug)]
pub struct MemoryNoteGateway {
    state: RwLock<MemoryState>,
    fail: AtomicBool,
}

impl Default for MemoryNoteGateway {
    fn default() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                next_id: 1,
                notes: BTreeMap::new(),
            }),
            fail: AtomicBool::new(false),
        }
    }
}

impl MemoryNoteGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with a [`StorageError`].
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Number of stored notes.
    pub async fn len(&self) -> usize {
        self.state.read().await.notes.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StorageError::new("simulated storage failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl NoteGateway for MemoryNoteGateway {
    async fn list_all(&self) -> Result<Vec<Note>, StorageError> {
        self.check()?;
        let state = self.state.read().await;
        let mut notes: Vec<Note> = state.notes.values().cloned().collect();
        notes.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(notes)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Note>, StorageError> {
        self.check()?;
        Ok(self.state.read().await.notes.get(&id).cloned())
    }

    async fn insert(&self, note: &NewNote) -> Result<DbId, StorageError> {
        self.check()?;
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;
        state.notes.insert(id, note.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, note: &Note) -> Result<Option<Timestamp>, StorageError> {
        self.check()?;
        let mut state = self.state.write().await;
        let Some(stored) = state.notes.get_mut(&note.id) else {
            return Ok(None);
        };
        let stamp = now();
        stored.title = note.title.clone();
        stored.content = note.content.clone();
        stored.updated_at = stamp;
        Ok(Some(stamp))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StorageError> {
        self.check()?;
        Ok(self.state.write().await.notes.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.check()
    }
}
