//! Business rules for notes.
//!
//! [`NoteService`] turns storage absence into [`CoreError::NotFound`] and owns
//! note construction. It trusts its caller for input shape: title validation
//! happens in the HTTP layer.
//!
//! `update` and `delete` fetch before they mutate. The fetch is what detects a
//! missing note; the mutation itself cannot tell a hit from a miss in the
//! general case. Two requests racing on the same id can therefore both pass
//! the fetch. When the gateway reports that the mutation matched no row, the
//! loser gets `NotFound` instead of a silently lost write.

use std::sync::Arc;

use crate::error::CoreError;
use crate::gateway::NoteGateway;
use crate::note::{NewNote, Note, NOTE_ENTITY};
use crate::types::DbId;

#[derive(Clone)]
pub struct NoteService {
    gateway: Arc<dyn NoteGateway>,
}

impl NoteService {
    pub fn new(gateway: Arc<dyn NoteGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> Result<Vec<Note>, CoreError> {
        Ok(self.gateway.list_all().await?)
    }

    pub async fn get(&self, id: DbId) -> Result<Note, CoreError> {
        self.gateway
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: NOTE_ENTITY,
                id,
            })
    }

    pub async fn create(&self, title: String, content: String) -> Result<Note, CoreError> {
        let draft = NewNote::new(title, content);
        let id = self.gateway.insert(&draft).await?;
        Ok(draft.with_id(id))
    }

    pub async fn update(&self, id: DbId, title: String, content: String) -> Result<Note, CoreError> {
        let mut note = self.get(id).await?;
        note.title = title;
        note.content = content;

        match self.gateway.update(&note).await? {
            Some(stamp) => {
                note.updated_at = stamp;
                Ok(note)
            }
            None => {
                tracing::warn!(note_id = id, "Note vanished between lookup and update");
                Err(CoreError::NotFound {
                    entity: NOTE_ENTITY,
                    id,
                })
            }
        }
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.get(id).await?;

        if !self.gateway.delete(id).await? {
            tracing::warn!(note_id = id, "Note vanished between lookup and delete");
            return Err(CoreError::NotFound {
                entity: NOTE_ENTITY,
                id,
            });
        }
        Ok(())
    }

    /// Whether the underlying store is reachable.
    pub async fn health(&self) -> Result<(), CoreError> {
        Ok(self.gateway.ping().await?)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use super::*;
    use crate::error::StorageError;
    use crate::gateway::MemoryNoteGateway;
    use crate::types::Timestamp;

    fn service() -> (NoteService, Arc<MemoryNoteGateway>) {
        let gateway = Arc::new(MemoryNoteGateway::new());
        (NoteService::new(gateway.clone()), gateway)
    }

    #[tokio::test]
    async fn create_then_get_round_trip() {
        let (service, _) = service();
        let created = service
            .create("Test Note".into(), "This is a test note".into())
            .await
            .unwrap();

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.title, "Test Note");
        assert_eq!(fetched.content, "This is a test note");
        assert!(fetched.created_at.timestamp() > 0);
        assert!(fetched.created_at <= fetched.updated_at);
    }

    #[tokio::test]
    async fn create_allows_empty_content() {
        let (service, _) = service();
        let note = service.create("Title".into(), String::new()).await.unwrap();
        assert_eq!(note.content, "");
    }

    #[tokio::test]
    async fn update_replaces_fields_and_advances_timestamp() {
        let (service, _) = service();
        let original = service.create("Old".into(), "old body".into()).await.unwrap();

        let updated = service
            .update(original.id, "Updated Title".into(), "Updated content".into())
            .await
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.title, "Updated Title");
        assert_eq!(updated.content, "Updated content");
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at >= original.updated_at);

        let stored = service.get(original.id).await.unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let (service, gateway) = service();
        let note = service.create("Doomed".into(), String::new()).await.unwrap();

        service.delete(note.id).await.unwrap();

        assert_matches!(
            service.get(note.id).await,
            Err(CoreError::NotFound { entity: "Note", id }) if id == note.id
        );
        assert!(gateway.is_empty().await);
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let (service, _) = service();

        assert_matches!(service.get(999).await, Err(CoreError::NotFound { id: 999, .. }));
        assert_matches!(
            service.update(999, "Title".into(), "Content".into()).await,
            Err(CoreError::NotFound { id: 999, .. })
        );
        assert_matches!(service.delete(999).await, Err(CoreError::NotFound { id: 999, .. }));
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let (service, _) = service();
        for title in ["A", "B", "C"] {
            service.create(title.into(), String::new()).await.unwrap();
        }

        let titles: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, ["C", "B", "A"]);
    }

    #[tokio::test]
    async fn list_empty_is_ok() {
        let (service, _) = service();
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn storage_failures_pass_through() {
        let (service, gateway) = service();
        let note = service.create("Kept".into(), String::new()).await.unwrap();
        gateway.set_fail(true);

        assert_matches!(service.list().await, Err(CoreError::Storage(_)));
        assert_matches!(service.get(note.id).await, Err(CoreError::Storage(_)));
        assert_matches!(
            service.create("New".into(), String::new()).await,
            Err(CoreError::Storage(_))
        );
        assert_matches!(service.delete(note.id).await, Err(CoreError::Storage(_)));
        assert_matches!(service.health().await, Err(CoreError::Storage(_)));
    }

    /// Answers lookups with a stale copy even after the row is gone, which is
    /// what a concurrent delete between fetch and mutate looks like.
    struct StaleReads {
        inner: MemoryNoteGateway,
        stale: Note,
    }

    #[async_trait]
    impl NoteGateway for StaleReads {
        async fn list_all(&self) -> Result<Vec<Note>, StorageError> {
            self.inner.list_all().await
        }
        async fn find_by_id(&self, _id: DbId) -> Result<Option<Note>, StorageError> {
            Ok(Some(self.stale.clone()))
        }
        async fn insert(&self, note: &NewNote) -> Result<DbId, StorageError> {
            self.inner.insert(note).await
        }
        async fn update(&self, note: &Note) -> Result<Option<Timestamp>, StorageError> {
            self.inner.update(note).await
        }
        async fn delete(&self, id: DbId) -> Result<bool, StorageError> {
            self.inner.delete(id).await
        }
        async fn ping(&self) -> Result<(), StorageError> {
            self.inner.ping().await
        }
    }

    #[tokio::test]
    async fn concurrent_delete_surfaces_not_found() {
        let gateway = Arc::new(StaleReads {
            inner: MemoryNoteGateway::new(),
            stale: NewNote::new("Gone", "").with_id(5),
        });
        let service = NoteService::new(gateway);

        assert_matches!(
            service.update(5, "New".into(), String::new()).await,
            Err(CoreError::NotFound { id: 5, .. })
        );
        assert_matches!(service.delete(5).await, Err(CoreError::NotFound { id: 5, .. }));
    }
}
