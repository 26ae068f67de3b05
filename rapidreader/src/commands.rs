//! Non-interactive library management.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use clap::Subcommand;
use reader_core::{
    ingest::{ingest_document, IngestError},
    library::{LibraryError, LibraryStore},
    types::EntryId,
};
use thiserror::Error;
use tracing::info;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print every entry, newest first
    List,
    /// Add a typed or pasted text
    Add {
        #[arg(long)]
        title: String,
        #[command(flatten)]
        source: ContentSource,
    },
    /// Replace the title and text of an entry
    Edit {
        id: String,
        #[arg(long)]
        title: String,
        #[command(flatten)]
        source: ContentSource,
    },
    /// Remove an entry
    Delete { id: String },
    /// Ingest a PDF, text or Markdown file
    Import {
        path: PathBuf,
        /// Title to use instead of the document's own
        #[arg(long)]
        title: Option<String>,
    },
}

#[derive(clap::Args, Debug, PartialEq, Eq)]
#[group(required = true, multiple = false)]
pub struct ContentSource {
    /// Read the text from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// The text itself
    pub text: Vec<String>,
}

impl ContentSource {
    fn read(&self) -> Result<String, CommandError> {
        match &self.file {
            Some(path) => Ok(fs::read_to_string(path)?),
            None => Ok(self.text.join(" ")),
        }
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Library(#[from] LibraryError),
    #[error("import failed: {0}")]
    Ingest(#[from] IngestError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("no entry with id {0}")]
    NotFound(String),
    #[error("entry {0} is an imported document and cannot be edited")]
    DocumentNotEditable(String),
}

pub fn run<S, W>(command: Commands, store: &mut S, out: &mut W) -> Result<(), CommandError>
where
    S: LibraryStore + ?Sized,
    W: Write,
{
    match command {
        Commands::List => list(store, out),
        Commands::Add { title, source } => {
            let content = source.read()?;
            let id = store.create(&title, &content, false)?;
            info!(id = %id, "added entry");
            writeln!(out, "{id}")?;
            Ok(())
        }
        Commands::Edit { id, title, source } => {
            let content = source.read()?;
            edit(store, &EntryId::from(id), &title, &content)
        }
        Commands::Delete { id } => {
            let id = EntryId::from(id);
            if !store.delete(&id)? {
                return Err(CommandError::NotFound(id.to_string()));
            }
            writeln!(out, "deleted {id}")?;
            Ok(())
        }
        Commands::Import { path, title } => import(store, &path, title.as_deref(), out),
    }
}

fn list<S, W>(store: &S, out: &mut W) -> Result<(), CommandError>
where
    S: LibraryStore + ?Sized,
    W: Write,
{
    for entry in store.list() {
        let marker = if entry.is_document { "doc" } else { "txt" };
        writeln!(
            out,
            "{}\t{:>3}%\t{}\t{}",
            entry.id,
            entry.progress_percent(),
            marker,
            entry.title
        )?;
    }
    Ok(())
}

fn edit<S>(store: &mut S, id: &EntryId, title: &str, content: &str) -> Result<(), CommandError>
where
    S: LibraryStore + ?Sized,
{
    match store.get(id) {
        None => return Err(CommandError::NotFound(id.to_string())),
        Some(entry) if entry.is_document => {
            return Err(CommandError::DocumentNotEditable(id.to_string()))
        }
        Some(_) => {}
    }
    store.update(id, title, content)?;
    Ok(())
}

fn import<S, W>(
    store: &mut S,
    path: &Path,
    title: Option<&str>,
    out: &mut W,
) -> Result<(), CommandError>
where
    S: LibraryStore + ?Sized,
    W: Write,
{
    let doc = ingest_document(path)?;
    let title = title.unwrap_or(&doc.title);
    let id = store.create(title, &doc.text, true)?;
    writeln!(out, "{id}\t{title}")?;
    Ok(())
}
