//! The note entity and its input validation rules.

use serde::Serialize;

use crate::types::{now, DbId, Timestamp};

/// Entity name used in not-found errors.
pub const NOTE_ENTITY: &str = "Note";

/// Maximum length of a note title in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Maximum length of note content in characters.
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// A persisted note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A note that has not been assigned an id by the store yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NewNote {
    /// Build a draft with both timestamps set to the current instant.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let stamp = now();
        Self {
            title: title.into(),
            content: content.into(),
            created_at: stamp,
            updated_at: stamp,
        }
    }

    /// Attach the store-assigned identifier.
    pub fn with_id(self, id: DbId) -> Note {
        Note {
            id,
            title: self.title,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a note title: required, and no longer than [`MAX_TITLE_LENGTH`].
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title is required".to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Title must be at most {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate note content. Empty content is allowed.
pub fn validate_content(content: &str) -> Result<(), String> {
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(format!(
            "Content must be at most {MAX_CONTENT_LENGTH} characters"
        ));
    }
    Ok(())
}
