use std::{path::Path, time::Instant};

use reader_core::{
    ingest::ingest_document,
    library::{LibraryStore, Storage},
    types::EntryId,
};
use tracing::{info, warn};

use crate::{document_view::DocumentView, prompt_view::ConfirmView};

use super::types::{Overlay, Screen};
use super::App;

impl<S: Storage> App<S> {
    pub(super) fn move_cursor(&mut self, delta: isize) {
        let len = self.library.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    pub(super) fn open_selected(&mut self) {
        let Some(id) = self.library.list().get(self.cursor).map(|e| e.id.clone()) else {
            return;
        };
        self.open_entry(&id);
    }

    /// Opens `id` in the reader at its stored position.
    pub fn open_entry(&mut self, id: &EntryId) -> bool {
        let Some(entry) = self.library.get(id) else {
            return false;
        };
        self.engine.open(entry);
        if let Some(pos) = self.library.list().iter().position(|e| &e.id == id) {
            self.cursor = pos;
        }
        self.selection.select(id.clone());
        self.document = DocumentView::default();
        self.screen = Screen::Reader;
        true
    }

    /// Pauses and closes the session, then returns to the library.
    pub(super) fn close_reader(&mut self) {
        self.engine.pause();
        self.engine.close();
        self.selection.clear();
        self.screen = Screen::Library;
    }

    /// Ingests `path` as a new document entry. Failures leave the library
    /// untouched and are reported on the status line.
    pub fn import_path(&mut self, path: &Path) -> Option<EntryId> {
        let doc = match ingest_document(path) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "import failed");
                self.status = Some(format!("Import failed: {e}"));
                return None;
            }
        };
        match self.library.create(&doc.title, &doc.text, true) {
            Ok(id) => {
                info!(id = %id, title = %doc.title, "imported document");
                self.status = Some(format!("Imported \"{}\"", doc.title));
                self.resources.register(id.clone(), doc.resource);
                self.cursor = 0;
                Some(id)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not store imported document");
                self.status = Some(format!("Import failed: {e}"));
                None
            }
        }
    }

    /// Imports `path` and opens it straight away.
    pub fn open_path(&mut self, path: &Path) -> bool {
        match self.import_path(path) {
            Some(id) => self.open_entry(&id),
            None => false,
        }
    }

    pub(super) fn request_delete(&mut self) {
        let Some(entry) = self.library.list().get(self.cursor) else {
            return;
        };
        let message = format!("Delete \"{}\"?", entry.title);
        self.overlay = Some(Overlay::ConfirmDelete {
            id: entry.id.clone(),
            view: ConfirmView { message },
        });
    }

    pub(super) fn delete_entry(&mut self, id: &EntryId) {
        if self.selection.is_selected(id) {
            self.close_reader();
        }
        match self.library.delete(id) {
            Ok(true) => {
                self.resources.release(id);
                self.status = Some("Entry deleted".into());
            }
            Ok(false) => {}
            Err(e) => {
                warn!(id = %id, error = %e, "delete failed");
                self.status = Some(format!("Delete failed: {e}"));
            }
        }
        self.move_cursor(0);
    }

    pub(super) fn restart(&mut self) {
        if let Err(e) = self.engine.restart(&mut self.library) {
            warn!(error = %e, "could not store restart position");
            self.status = Some(format!("Could not save progress: {e}"));
        }
    }

    pub(super) fn toggle_document(&mut self) {
        match self.screen {
            Screen::Document => self.screen = Screen::Reader,
            Screen::Reader => {
                let Some((is_document, has_pages)) = self
                    .active_entry()
                    .map(|e| (e.is_document, self.resources.get(&e.id).is_some()))
                else {
                    return;
                };
                if !is_document {
                    self.status = Some("Only imported documents have a page view".into());
                } else if !has_pages {
                    self.status = Some("Source pages are only kept for this session".into());
                } else {
                    self.engine.pause();
                    self.screen = Screen::Document;
                }
            }
            Screen::Library => {}
        }
    }

    /// Advances playback if a step is due.
    pub fn tick(&mut self, now: Instant) {
        if let Err(e) = self.engine.tick(now, &mut self.library) {
            warn!(error = %e, "could not store reading progress");
            self.status = Some(format!("Could not save progress: {e}"));
        }
    }
}
