//! Reader preferences: theme, rate and display toggles.
//!
//! Loading never fails. Each field that is missing or invalid falls back to
//! its default on its own, so one bad value does not discard the rest.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::rsvp::{DEFAULT_WPM, MAX_WPM, MIN_WPM};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
    Sepia,
}

impl ThemeName {
    pub const ALL: [ThemeName; 3] = [ThemeName::Light, ThemeName::Dark, ThemeName::Sepia];

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "light" => Some(ThemeName::Light),
            "dark" => Some(ThemeName::Dark),
            "sepia" => Some(ThemeName::Sepia),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
            ThemeName::Sepia => "sepia",
        }
    }

    /// Name shown in the settings overlay.
    pub fn label(self) -> &'static str {
        match self {
            ThemeName::Light => "Light",
            ThemeName::Dark => "Midnight",
            ThemeName::Sepia => "Sepia",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Sepia,
            ThemeName::Sepia => ThemeName::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: ThemeName,
    pub words_per_minute: u16,
    pub show_context_preview: bool,
    pub show_focus_guide: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeName::Light,
            words_per_minute: DEFAULT_WPM,
            show_context_preview: true,
            show_focus_guide: true,
        }
    }
}

impl Settings {
    /// Validates a parsed settings blob field by field.
    pub fn from_value(value: &Value) -> Self {
        let defaults = Settings::default();
        let Some(map) = value.as_object() else {
            return defaults;
        };
        let theme = map
            .get("theme")
            .and_then(Value::as_str)
            .and_then(ThemeName::parse)
            .unwrap_or(defaults.theme);
        let words_per_minute = map
            .get("wordsPerMinute")
            .and_then(Value::as_u64)
            .filter(|wpm| (u64::from(MIN_WPM)..=u64::from(MAX_WPM)).contains(wpm))
            .map(|wpm| wpm as u16)
            .unwrap_or(defaults.words_per_minute);
        let show_context_preview = map
            .get("showContextPreview")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.show_context_preview);
        let show_focus_guide = map
            .get("showFocusGuide")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.show_focus_guide);
        Self {
            theme,
            words_per_minute,
            show_context_preview,
            show_focus_guide,
        }
    }

    pub fn from_json(data: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(data) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                warn!(error = %e, "settings unreadable; using defaults");
                Settings::default()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Settings file on disk.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Settings {
        match fs::read(&self.path) {
            Ok(data) => Settings::from_json(&data),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Settings::default(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read settings");
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let s = serde_json::to_string_pretty(settings)?;
        let mut f = fs::File::create(&self.path)?;
        f.write_all(s.as_bytes())?;
        Ok(())
    }
}
