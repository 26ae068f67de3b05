use std::time::Instant;

use reader_core::{
    library::{LibraryError, LibraryStore, Storage},
    types::EntryId,
};
use tracing::{info, warn};

use crate::entry_form_view::EntryFormView;

use super::types::{FormCommand, Overlay, Screen};
use super::App;

impl<S: Storage> App<S> {
    pub(super) fn start_add(&mut self) {
        self.overlay = Some(Overlay::EntryForm {
            editing: None,
            form: EntryFormView::new("New text"),
        });
    }

    /// Edits the entry open in the reader, or the highlighted one in the library.
    pub(super) fn start_edit(&mut self) {
        let entry = match self.screen {
            Screen::Reader => self.active_entry(),
            _ => self.library.list().get(self.cursor),
        };
        let Some(entry) = entry else {
            return;
        };
        if entry.is_document {
            self.status = Some("Imported documents cannot be edited".into());
            return;
        }
        let editing = Some(entry.id.clone());
        let form = EntryFormView::with_values("Edit text", &entry.title, &entry.content);
        self.engine.pause();
        self.overlay = Some(Overlay::EntryForm { editing, form });
    }

    pub(super) fn apply_form_command(&mut self, command: FormCommand, now: Instant) {
        let Some(Overlay::EntryForm { form, .. }) = &mut self.overlay else {
            return;
        };
        match command {
            FormCommand::Cancel => self.overlay = None,
            FormCommand::NextField => form.next_field(),
            FormCommand::Enter => form.enter(),
            FormCommand::Backspace => form.backspace(),
            FormCommand::Insert(c) => form.push_char(c),
            FormCommand::Save => self.save_form(now),
        }
    }

    /// Bracketed paste into whichever text input is open.
    pub(super) fn paste(&mut self, text: &str) {
        match &mut self.overlay {
            Some(Overlay::EntryForm { form, .. }) => form.paste(text),
            Some(Overlay::Import(prompt)) => text.chars().for_each(|c| prompt.push_char(c)),
            _ => {}
        }
    }

    /// Stores the form. A rejected submit keeps the overlay and what was typed.
    fn save_form(&mut self, now: Instant) {
        let Some(Overlay::EntryForm { editing, form }) = &self.overlay else {
            return;
        };
        let editing = editing.clone();
        let (title, content) = (form.title.clone(), form.content.clone());

        let result = match &editing {
            None => self.library.create(&title, &content, false).map(Some),
            Some(id) => self
                .library
                .update(id, &title, &content)
                .map(|found| found.then(|| id.clone())),
        };

        match result {
            Ok(saved) => {
                self.overlay = None;
                self.finish_save(editing.as_ref(), saved, &content, now);
            }
            Err(e) => {
                if let LibraryError::Storage(_) = e {
                    warn!(error = %e, "could not store entry");
                }
                if let Some(Overlay::EntryForm { form, .. }) = &mut self.overlay {
                    form.error = Some(e.to_string());
                }
            }
        }
    }

    fn finish_save(
        &mut self,
        editing: Option<&EntryId>,
        saved: Option<EntryId>,
        content: &str,
        now: Instant,
    ) {
        match (editing, saved) {
            (None, Some(id)) => {
                info!(id = %id, "added entry");
                self.cursor = 0;
                self.status = Some("Entry added".into());
            }
            (Some(_), Some(id)) => {
                info!(id = %id, "edited entry");
                if self.selection.is_selected(&id) {
                    self.engine.replace_content(content, now);
                }
                if let Some(pos) = self.library.list().iter().position(|e| e.id == id) {
                    self.cursor = pos;
                }
                self.status = Some("Entry saved".into());
            }
            (_, None) => {
                self.status = Some("Entry no longer exists".into());
            }
        }
    }
}
