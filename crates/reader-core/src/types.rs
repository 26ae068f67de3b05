use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::text::word_count;

/// Opaque identifier of a library entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored piece of reading material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEntry {
    pub id: EntryId,
    pub title: String,
    pub content: String,
    /// Set for entries produced by document ingestion; their content is not editable.
    #[serde(default)]
    pub is_document: bool,
    #[serde(default)]
    pub last_index: usize,
    /// Epoch milliseconds.
    #[serde(default)]
    pub created_at: i64,
}

impl TextEntry {
    pub fn word_count(&self) -> usize {
        word_count(&self.content)
    }

    /// Reading progress rounded to a whole percentage, 0 for content without words.
    /// A position past the end, left behind by an edit that shortened the text,
    /// counts as finished.
    pub fn progress_percent(&self) -> u32 {
        let total = self.word_count();
        if total == 0 {
            return 0;
        }
        let read = self.last_index.min(total);
        ((read as f64 / total as f64) * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Text,
    Markdown,
    #[serde(other)]
    Other,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => DocumentFormat::Pdf,
            "txt" | "text" => DocumentFormat::Text,
            "md" | "markdown" => DocumentFormat::Markdown,
            _ => DocumentFormat::Other,
        }
    }
}
