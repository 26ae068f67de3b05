use std::fs;

use lopdf::{
    content::{Content, Operation},
    dictionary, Object, Stream,
};
use reader_core::ingest::{ingest_document, IngestError, ResourceRegistry};
use reader_core::library::{Library, LibraryStore, MemoryStorage};
use reader_core::text::tokenize;
use reader_core::types::DocumentFormat;

fn build_test_pdf(pages: &[&str], title: Option<&str>) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.new_object_id();
    doc.objects.insert(
        font_id,
        Object::Dictionary(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        }),
    );

    let mut page_ids = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec![Object::Name(b"F1".to_vec()), 12.into()]),
                Operation::new("Td", vec![50.into(), 150.into()]),
                Operation::new("Tj", vec![Object::string_literal(text.to_string())]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.new_object_id();
        doc.objects.insert(
            content_id,
            Object::Stream(Stream::new(
                dictionary! {},
                content.encode().expect("encode content"),
            )),
        );

        let resources_id = doc.new_object_id();
        doc.objects.insert(
            resources_id,
            Object::Dictionary(dictionary! {
                "Font" => dictionary! { "F1" => Object::Reference(font_id) }
            }),
        );

        let page_id = doc.new_object_id();
        doc.objects.insert(
            page_id,
            Object::Dictionary(dictionary! {
                "Type" => "Page",
                "Parent" => Object::Reference(pages_id),
                "MediaBox" => vec![0.into(), 0.into(), 200.into(), 200.into()],
                "Contents" => Object::Reference(content_id),
                "Resources" => Object::Reference(resources_id),
            }),
        );
        page_ids.push(page_id);
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => Object::Integer(page_ids.len() as i64),
            "Kids" => page_ids.iter().cloned().map(Object::Reference).collect::<Vec<_>>(),
        }),
    );

    let catalog_id = doc.new_object_id();
    doc.objects.insert(
        catalog_id,
        Object::Dictionary(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        }),
    );

    doc.trailer.set("Root", Object::Reference(catalog_id));
    if let Some(title) = title {
        doc.trailer.set(
            "Info",
            dictionary! { "Title" => Object::string_literal(title) },
        );
    }
    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("save pdf");
    buf
}

#[test]
fn pdf_text_and_title_are_extracted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sample.pdf");
    fs::write(
        &path,
        build_test_pdf(&["Hello PDF page one", "Page two body"], Some("Test Title")),
    )
    .expect("write pdf");

    let doc = ingest_document(&path).expect("ingest pdf");
    assert_eq!(doc.title, "Test Title");
    assert!(doc.text.contains("Hello PDF page one"));
    assert!(doc.text.contains("Page two body"));
    assert_eq!(doc.resource.format, DocumentFormat::Pdf);
    assert_eq!(doc.resource.page_count(), 2);
    assert_eq!(tokenize(&doc.text).len(), 7);
}

#[test]
fn untitled_pdf_uses_file_stem() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("field-notes.pdf");
    fs::write(&path, build_test_pdf(&["Some words here"], None)).expect("write pdf");

    let doc = ingest_document(&path).expect("ingest pdf");
    assert_eq!(doc.title, "field-notes");
}

#[test]
fn garbage_pdf_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.pdf");
    fs::write(&path, b"not a pdf at all").expect("write");
    assert!(ingest_document(&path).is_err());
}

#[test]
fn imported_document_becomes_a_document_entry() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sample.pdf");
    fs::write(&path, build_test_pdf(&["One two three"], Some("Counting"))).expect("write pdf");

    let mut library = Library::open(MemoryStorage::new());
    let mut registry = ResourceRegistry::new();
    let doc = ingest_document(&path).expect("ingest");
    let id = library
        .create(&doc.title, &doc.text, true)
        .expect("create entry");
    registry.register(id.clone(), doc.resource);

    let entry = library.get(&id).expect("entry");
    assert!(entry.is_document);
    assert_eq!(entry.title, "Counting");
    assert_eq!(entry.word_count(), 3);

    assert!(library.delete(&id).expect("delete"));
    assert!(registry.release(&id).is_some());
    assert!(registry.is_empty());
}

#[test]
fn failed_import_leaves_library_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("book.docx");
    fs::write(&path, b"zip bytes").expect("write");

    let mut library = Library::open(MemoryStorage::new());
    library.create("Kept", "still here", false).expect("create");

    let result = ingest_document(&path);
    assert!(matches!(result, Err(IngestError::Unsupported(_))));
    assert_eq!(library.list().len(), 1);
    assert_eq!(library.list()[0].title, "Kept");
}
