use std::path::Path;

use lopdf::Document as LoDocument;

use super::error::IngestError;
use super::text::flatten_page;

pub(super) struct PdfText {
    pub title: Option<String>,
    pub pages: Vec<String>,
}

pub(super) fn load_pdf_text(path: &Path) -> Result<PdfText, IngestError> {
    let doc = LoDocument::load(path)?;
    if doc.is_encrypted() {
        return Err(IngestError::Encrypted);
    }
    let pages = doc.get_pages();
    if pages.is_empty() {
        return Err(IngestError::Empty);
    }
    let page_texts = pages
        .keys()
        .map(|page_num| {
            let raw = doc.extract_text(&[*page_num]).unwrap_or_default();
            flatten_page(&raw)
        })
        .collect();
    Ok(PdfText {
        title: pdf_title(&doc),
        pages: page_texts,
    })
}

fn pdf_title(doc: &LoDocument) -> Option<String> {
    let info_obj = doc.trailer.get(b"Info").ok()?;
    let dict = if let Ok(info_ref) = info_obj.as_reference() {
        doc.get_dictionary(info_ref).ok()?
    } else {
        info_obj.as_dict().ok()?
    };
    dict.get(b"Title")
        .ok()
        .and_then(object_to_string)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

fn object_to_string(obj: &lopdf::Object) -> Option<String> {
    match obj {
        lopdf::Object::String(s, _) => Some(String::from_utf8_lossy(&s[..]).to_string()),
        lopdf::Object::Name(n) => Some(String::from_utf8_lossy(n).to_string()),
        _ => None,
    }
}
