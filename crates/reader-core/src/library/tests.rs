use std::io;

use crate::types::{EntryId, TextEntry};

use super::{
    active_entry, Library, LibraryError, LibraryStore, MemoryStorage, Selection, Storage,
    StorageError, ValidationError,
};

fn empty_library() -> Library<MemoryStorage> {
    Library::open(MemoryStorage::new())
}

fn stored_entries(library: &Library<MemoryStorage>) -> Vec<TextEntry> {
    let data = library.storage().data().expect("slot written");
    serde_json::from_slice(data).expect("valid json")
}

struct ReadOnlyStorage {
    inner: MemoryStorage,
}

impl Storage for ReadOnlyStorage {
    fn read(&self) -> Result<Option<Vec<u8>>, StorageError> {
        self.inner.read()
    }

    fn write(&mut self, _bytes: &[u8]) -> Result<(), StorageError> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into())
    }
}

#[test]
fn create_prepends_and_persists() {
    let mut lib = empty_library();
    let first = lib.create("First", "one two", false).expect("create");
    let second = lib.create("Second", "three", true).expect("create");

    let ids: Vec<&EntryId> = lib.list().iter().map(|e| &e.id).collect();
    assert_eq!(ids, vec![&second, &first]);

    let stored = stored_entries(&lib);
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].id, second);
    assert!(stored[0].is_document);
    assert_eq!(stored[0].last_index, 0);
    assert!(stored[0].created_at > 0);
}

#[test]
fn create_rejects_blank_title_or_content() {
    let mut lib = empty_library();
    lib.create("Keep", "body", false).expect("create");
    let before = lib.list().to_vec();

    let err = lib.create("", "body", false).unwrap_err();
    assert!(matches!(
        err,
        LibraryError::Validation(ValidationError::EmptyTitle)
    ));
    let err = lib.create("Title", "  \n", false).unwrap_err();
    assert!(matches!(
        err,
        LibraryError::Validation(ValidationError::EmptyContent)
    ));

    assert_eq!(lib.list(), before.as_slice());
    assert_eq!(stored_entries(&lib), before);
}

#[test]
fn create_then_delete_restores_collection() {
    let mut lib = empty_library();
    lib.create("Existing", "alpha beta", false).expect("create");
    let before = lib.list().to_vec();

    let id = lib.create("Temp", "gamma", false).expect("create");
    assert!(lib.delete(&id).expect("delete"));

    assert_eq!(lib.list(), before.as_slice());
    assert_eq!(stored_entries(&lib), before);
}

#[test]
fn delete_unknown_id_is_noop() {
    let mut lib = empty_library();
    lib.create("Existing", "alpha", false).expect("create");
    let before = lib.list().to_vec();

    assert!(!lib.delete(&EntryId::from("missing")).expect("delete"));
    assert_eq!(lib.list(), before.as_slice());
}

#[test]
fn update_replaces_title_and_content_only() {
    let mut lib = empty_library();
    let id = lib.create("Old", "one two three", false).expect("create");
    lib.update_progress(&id, 2).expect("progress");
    let created_at = lib.get(&id).expect("entry").created_at;

    assert!(lib.update(&id, "New", "four five").expect("update"));
    let entry = lib.get(&id).expect("entry");
    assert_eq!(entry.title, "New");
    assert_eq!(entry.content, "four five");
    assert_eq!(entry.last_index, 2);
    assert_eq!(entry.created_at, created_at);
    assert!(!entry.is_document);
}

#[test]
fn update_unknown_id_or_blank_fields_changes_nothing() {
    let mut lib = empty_library();
    let id = lib.create("Title", "body", false).expect("create");
    let before = lib.list().to_vec();

    assert!(!lib.update(&EntryId::from("nope"), "T", "C").expect("update"));
    assert!(lib.update(&id, "", "C").is_err());
    assert_eq!(lib.list(), before.as_slice());
}

#[test]
fn update_progress_touches_only_target() {
    let mut lib = empty_library();
    let a = lib.create("A", "one two three", false).expect("create");
    let b = lib.create("B", "four five", false).expect("create");

    assert!(lib.update_progress(&a, 3).expect("progress"));
    assert_eq!(lib.get(&a).expect("a").last_index, 3);
    assert_eq!(lib.get(&b).expect("b").last_index, 0);

    let stored = stored_entries(&lib);
    let stored_a = stored.iter().find(|e| e.id == a).expect("a stored");
    assert_eq!(stored_a.last_index, 3);
}

#[test]
fn update_progress_with_empty_id_is_ignored() {
    let mut lib = empty_library();
    assert!(!lib
        .update_progress(&EntryId::from(""), 4)
        .expect("progress"));
    assert!(lib.storage().data().is_none());
}

#[test]
fn update_progress_is_not_clamped() {
    let mut lib = empty_library();
    let id = lib.create("A", "one", false).expect("create");
    lib.update_progress(&id, 40).expect("progress");
    assert_eq!(lib.get(&id).expect("entry").last_index, 40);
}

#[test]
fn corrupt_storage_loads_empty_and_recovers() {
    let mut lib = Library::open(MemoryStorage::with_data("{not json"));
    assert!(lib.is_empty());

    let id = lib.create("Fresh", "start over", false).expect("create");
    let stored = stored_entries(&lib);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, id);
}

#[test]
fn list_is_sorted_newest_first_on_load() {
    let raw = r#"[
        {"id":"old","title":"Old","content":"a","isDocument":false,"lastIndex":0,"createdAt":10},
        {"id":"new","title":"New","content":"b","isDocument":true,"lastIndex":1,"createdAt":30},
        {"id":"mid","title":"Mid","content":"c","isDocument":false,"lastIndex":0,"createdAt":20}
    ]"#;
    let lib = Library::open(MemoryStorage::with_data(raw));
    let ids: Vec<&str> = lib.list().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);
}

#[test]
fn failed_write_leaves_view_untouched() {
    let mut seeded = empty_library();
    seeded.create("Seed", "body", false).expect("create");
    let data = seeded.storage().data().expect("data").to_vec();

    let mut lib = Library::open(ReadOnlyStorage {
        inner: MemoryStorage::with_data(data),
    });
    let before = lib.list().to_vec();
    let err = lib.create("New", "text", false).unwrap_err();
    assert!(matches!(err, LibraryError::Storage(_)));
    assert_eq!(lib.list(), before.as_slice());
}

#[test]
fn selection_resolves_against_current_list() {
    let mut lib = empty_library();
    let id = lib.create("A", "one", false).expect("create");
    let mut selection = Selection::default();
    assert!(selection.active(lib.list()).is_none());

    selection.select(id.clone());
    assert_eq!(selection.active(lib.list()).map(|e| &e.id), Some(&id));

    lib.update(&id, "Renamed", "one").expect("update");
    assert_eq!(
        selection.active(lib.list()).map(|e| e.title.as_str()),
        Some("Renamed")
    );

    lib.delete(&id).expect("delete");
    assert!(selection.active(lib.list()).is_none());
    assert!(active_entry(lib.list(), None).is_none());
}
