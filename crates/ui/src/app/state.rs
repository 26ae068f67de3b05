use reader_core::{
    ingest::ResourceRegistry,
    library::{FileStorage, Library, LibraryStore, Selection, Storage},
    rsvp::PlaybackEngine,
    settings::{Settings, SettingsStore},
    types::TextEntry,
};

use crate::{document_view::DocumentView, theme::Theme};

use super::types::{Overlay, Screen};

pub struct App<S: Storage = FileStorage> {
    pub(super) library: Library<S>,
    pub(super) resources: ResourceRegistry,
    pub(super) selection: Selection,
    pub(super) engine: PlaybackEngine,
    pub(super) settings: Settings,
    pub(super) settings_store: SettingsStore,
    pub(super) theme: Theme,
    pub(super) screen: Screen,
    pub(super) overlay: Option<Overlay>,
    /// Highlighted row on the library screen.
    pub(super) cursor: usize,
    pub(super) document: DocumentView,
    pub(super) status: Option<String>,
}

impl<S: Storage> App<S> {
    pub fn new(library: Library<S>, settings_store: SettingsStore) -> Self {
        let settings = settings_store.load();
        Self {
            library,
            resources: ResourceRegistry::new(),
            selection: Selection::default(),
            engine: PlaybackEngine::new(settings.words_per_minute),
            theme: Theme::from_name(settings.theme),
            settings,
            settings_store,
            screen: Screen::Library,
            overlay: None,
            cursor: 0,
            document: DocumentView::default(),
            status: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn library(&self) -> &Library<S> {
        &self.library
    }

    pub fn engine(&self) -> &PlaybackEngine {
        &self.engine
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Entry open in the reader, if any.
    pub fn active_entry(&self) -> Option<&TextEntry> {
        self.selection.active(self.library.list())
    }
}
