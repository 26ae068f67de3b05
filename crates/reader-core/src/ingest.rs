//! Turns documents on disk into library text.
//!
//! Ingestion returns the plain text to store plus a [`DocumentResource`], the
//! per-page view of the source kept for the current session only. Callers hold
//! resources in a [`ResourceRegistry`] and release them when the entry goes.

mod error;
mod pdf;
mod text;

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::text::word_count;
use crate::types::{DocumentFormat, EntryId};

pub use error::IngestError;

/// Viewable form of an ingested document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentResource {
    pub path: PathBuf,
    pub format: DocumentFormat,
    pub pages: Vec<String>,
}

impl DocumentResource {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[derive(Debug, Clone)]
pub struct IngestedDocument {
    pub title: String,
    pub text: String,
    pub resource: DocumentResource,
}

pub fn ingest_document(path: &Path) -> Result<IngestedDocument, IngestError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let format = DocumentFormat::from_extension(ext);
    let (meta_title, pages) = match format {
        DocumentFormat::Pdf => {
            let pdf = pdf::load_pdf_text(path)?;
            (pdf.title, pdf.pages)
        }
        DocumentFormat::Text | DocumentFormat::Markdown => {
            (None, vec![fs::read_to_string(path)?])
        }
        DocumentFormat::Other => {
            return Err(IngestError::Unsupported(if ext.is_empty() {
                path.display().to_string()
            } else {
                ext.to_string()
            }));
        }
    };

    let text = pages.join("\n");
    if word_count(&text) == 0 {
        return Err(IngestError::NoText);
    }
    let title = meta_title
        .or_else(|| title_from_path(path))
        .unwrap_or_else(|| "Untitled".to_string());
    info!(
        path = %path.display(),
        pages = pages.len(),
        words = word_count(&text),
        "ingested document"
    );
    Ok(IngestedDocument {
        title,
        text,
        resource: DocumentResource {
            path: path.to_path_buf(),
            format,
            pages,
        },
    })
}

fn title_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Session-scoped document resources keyed by library entry.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    resources: HashMap<EntryId, DocumentResource>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: EntryId, resource: DocumentResource) {
        self.resources.insert(id, resource);
    }

    pub fn get(&self, id: &EntryId) -> Option<&DocumentResource> {
        self.resources.get(id)
    }

    pub fn release(&mut self, id: &EntryId) -> Option<DocumentResource> {
        self.resources.remove(id)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
