use crate::types::DbId;

/// Failure reported by the underlying store.
///
/// Gateways wrap whatever their driver returns; the source is kept for
/// logging but never rendered to clients.
#[derive(Debug, thiserror::Error)]
#[error("Storage failure: {source}")]
pub struct StorageError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl StorageError {
    pub fn new<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Self {
            source: source.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
