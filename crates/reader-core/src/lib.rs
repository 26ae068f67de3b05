pub mod config;
pub mod ingest;
pub mod library;
pub mod rsvp;
pub mod settings;
pub mod text;
pub mod types;

pub use library::{Library, LibraryError, LibraryStore, ValidationError};
pub use rsvp::{PlaybackEngine, PlaybackState};
pub use types::{EntryId, TextEntry};
