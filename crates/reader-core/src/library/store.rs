use chrono::Utc;
use tracing::{debug, warn};

use crate::types::{EntryId, TextEntry};

use super::storage::{Storage, StorageError};
use super::{validate, LibraryResult, LibraryStore};

/// Library backed by one storage slot.
///
/// Every mutation re-reads the slot, applies the change, writes the whole
/// collection back and only then refreshes the in-memory view, so a failed
/// write leaves both the slot and the view as they were.
pub struct Library<S: Storage> {
    storage: S,
    entries: Vec<TextEntry>,
}

impl<S: Storage> Library<S> {
    /// Loads the collection. Unreadable or corrupt data yields an empty library.
    pub fn open(storage: S) -> Self {
        let entries = match read_collection(&storage) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "library storage unreadable; starting empty");
                Vec::new()
            }
        };
        let mut library = Self {
            storage,
            entries: Vec::new(),
        };
        library.set_view(entries);
        library
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn set_view(&mut self, mut entries: Vec<TextEntry>) {
        // Stable: entries sharing a timestamp keep their stored order.
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.entries = entries;
    }

    /// Read-modify-write of the whole collection. `apply` returns whether it
    /// changed anything; unchanged collections are not written.
    fn mutate<F>(&mut self, apply: F) -> LibraryResult<bool>
    where
        F: FnOnce(&mut Vec<TextEntry>) -> bool,
    {
        let mut stored = read_collection(&self.storage)?;
        if !apply(&mut stored) {
            return Ok(false);
        }
        let bytes = serde_json::to_vec(&stored).map_err(StorageError::from)?;
        self.storage.write(&bytes)?;
        self.set_view(stored);
        Ok(true)
    }
}

fn read_collection<S: Storage>(storage: &S) -> Result<Vec<TextEntry>, StorageError> {
    let Some(data) = storage.read()? else {
        return Ok(Vec::new());
    };
    match serde_json::from_slice::<Vec<TextEntry>>(&data) {
        Ok(entries) => Ok(entries),
        Err(e) => {
            warn!(error = %e, "discarding corrupt library data");
            Ok(Vec::new())
        }
    }
}

impl<S: Storage> LibraryStore for Library<S> {
    fn list(&self) -> &[TextEntry] {
        &self.entries
    }

    fn create(&mut self, title: &str, content: &str, is_document: bool) -> LibraryResult<EntryId> {
        validate(title, content)?;
        let id = EntryId::generate();
        let entry = TextEntry {
            id: id.clone(),
            title: title.to_string(),
            content: content.to_string(),
            is_document,
            last_index: 0,
            created_at: Utc::now().timestamp_millis(),
        };
        self.mutate(|stored| {
            stored.insert(0, entry);
            true
        })?;
        debug!(%id, is_document, "created library entry");
        Ok(id)
    }

    fn update(&mut self, id: &EntryId, title: &str, content: &str) -> LibraryResult<bool> {
        validate(title, content)?;
        let changed = self.mutate(|stored| match stored.iter_mut().find(|e| &e.id == id) {
            Some(entry) => {
                entry.title = title.to_string();
                entry.content = content.to_string();
                true
            }
            None => false,
        })?;
        if !changed {
            debug!(%id, "update ignored; no such entry");
        }
        Ok(changed)
    }

    fn delete(&mut self, id: &EntryId) -> LibraryResult<bool> {
        let changed = self.mutate(|stored| {
            let before = stored.len();
            stored.retain(|e| &e.id != id);
            stored.len() != before
        })?;
        debug!(%id, changed, "delete library entry");
        Ok(changed)
    }

    fn update_progress(&mut self, id: &EntryId, index: usize) -> LibraryResult<bool> {
        if id.is_empty() {
            return Ok(false);
        }
        self.mutate(|stored| match stored.iter_mut().find(|e| &e.id == id) {
            Some(entry) => {
                entry.last_index = index;
                true
            }
            None => false,
        })
    }
}
