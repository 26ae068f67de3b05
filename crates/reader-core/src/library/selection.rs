use crate::types::{EntryId, TextEntry};

/// The entry currently opened for reading, held by id only.
///
/// Mutations replace entries wholesale, so the active entry is always looked
/// up again from the current list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    id: Option<EntryId>,
}

impl Selection {
    pub fn select(&mut self, id: EntryId) {
        self.id = Some(id);
    }

    pub fn clear(&mut self) {
        self.id = None;
    }

    pub fn id(&self) -> Option<&EntryId> {
        self.id.as_ref()
    }

    pub fn is_selected(&self, id: &EntryId) -> bool {
        self.id.as_ref() == Some(id)
    }

    pub fn active<'a>(&self, entries: &'a [TextEntry]) -> Option<&'a TextEntry> {
        active_entry(entries, self.id.as_ref())
    }
}

pub fn active_entry<'a>(entries: &'a [TextEntry], id: Option<&EntryId>) -> Option<&'a TextEntry> {
    let id = id?;
    entries.iter().find(|e| &e.id == id)
}
