//! Repository for the `notes` table.

use async_trait::async_trait;
use notes_core::error::StorageError;
use notes_core::gateway::NoteGateway;
use notes_core::note::{NewNote, Note};
use notes_core::types::{now, DbId, Timestamp};

use crate::models::note::NoteRow;
use crate::DbPool;

/// Column list for notes queries.
const COLUMNS: &str = "id, title, content, created_at, updated_at";

/// PostgreSQL-backed [`NoteGateway`].
#[derive(Clone)]
pub struct NoteRepo {
    pool: DbPool,
}

impl NoteRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteGateway for NoteRepo {
    async fn list_all(&self) -> Result<Vec<Note>, StorageError> {
        let query = format!("SELECT {COLUMNS} FROM notes ORDER BY created_at DESC, id DESC");
        let rows = sqlx::query_as::<_, NoteRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::new)?;
        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Note>, StorageError> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        let row = sqlx::query_as::<_, NoteRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::new)?;
        Ok(row.map(Note::from))
    }

    async fn insert(&self, note: &NewNote) -> Result<DbId, StorageError> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO notes (title, content, created_at, updated_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.created_at)
        .bind(note.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(StorageError::new)
    }

    async fn update(&self, note: &Note) -> Result<Option<Timestamp>, StorageError> {
        sqlx::query_scalar::<_, Timestamp>(
            "UPDATE notes SET title = $2, content = $3, updated_at = $4
             WHERE id = $1
             RETURNING updated_at",
        )
        .bind(note.id)
        .bind(&note.title)
        .bind(&note.content)
        .bind(now())
        .fetch_optional(&self.pool)
        .await
        .map_err(StorageError::new)
    }

    async fn delete(&self, id: DbId) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::new)?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        crate::health_check(&self.pool)
            .await
            .map_err(StorageError::new)
    }
}
