//! Persisted collection of reading entries.
//!
//! `LibraryStore` is the capability the playback engine and the UI depend on.
//! `Library` implements it over a single `Storage` slot holding the whole
//! collection as JSON.

mod selection;
mod storage;
mod store;

#[cfg(test)]
mod tests;

use thiserror::Error;

use crate::types::{EntryId, TextEntry};

pub use selection::{active_entry, Selection};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::Library;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("content must not be empty")]
    EmptyContent,
}

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("library storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type LibraryResult<T> = Result<T, LibraryError>;

/// Rejects blank titles and blank content.
pub fn validate(title: &str, content: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if content.trim().is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    Ok(())
}

/// Operations over the reading library.
///
/// Lookups by unknown id are not errors: `update`, `delete` and
/// `update_progress` report `Ok(false)` and leave the collection untouched.
pub trait LibraryStore {
    /// Entries ordered newest first.
    fn list(&self) -> &[TextEntry];

    fn create(&mut self, title: &str, content: &str, is_document: bool) -> LibraryResult<EntryId>;

    /// Replaces title and content; progress, creation time and the document
    /// flag are kept.
    fn update(&mut self, id: &EntryId, title: &str, content: &str) -> LibraryResult<bool>;

    fn delete(&mut self, id: &EntryId) -> LibraryResult<bool>;

    /// Stores `index` as the entry's reading position. No clamping happens here.
    fn update_progress(&mut self, id: &EntryId, index: usize) -> LibraryResult<bool>;

    fn get(&self, id: &EntryId) -> Option<&TextEntry> {
        self.list().iter().find(|e| &e.id == id)
    }
}
