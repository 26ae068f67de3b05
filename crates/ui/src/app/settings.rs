use std::time::Instant;

use reader_core::{library::Storage, rsvp::clamp_wpm};
use tracing::warn;

use crate::settings_view::{SettingsField, SettingsView};
use crate::theme::Theme;

use super::types::{Overlay, SettingsCommand};
use super::App;

/// Rate change per key press, both in the reader and in the overlay.
pub(super) const WPM_STEP: i32 = 25;

impl<S: Storage> App<S> {
    pub(super) fn open_settings(&mut self) {
        self.overlay = Some(Overlay::Settings(SettingsView::default()));
    }

    pub(super) fn apply_settings_command(&mut self, command: SettingsCommand, now: Instant) {
        let Some(Overlay::Settings(view)) = &mut self.overlay else {
            return;
        };
        match command {
            SettingsCommand::Close => self.overlay = None,
            SettingsCommand::Up => view.up(),
            SettingsCommand::Down => view.down(),
            SettingsCommand::Change(delta) => {
                let field = view.field();
                self.change_setting(field, delta, now);
            }
        }
    }

    fn change_setting(&mut self, field: SettingsField, delta: i32, now: Instant) {
        match field {
            SettingsField::Theme => {
                self.settings.theme = self.settings.theme.next();
                self.theme = Theme::from_name(self.settings.theme);
            }
            SettingsField::Speed => {
                let step = if delta < 0 { -WPM_STEP } else { WPM_STEP };
                self.set_words_per_minute(i32::from(self.settings.words_per_minute) + step, now);
                return;
            }
            SettingsField::ContextPreview => {
                self.settings.show_context_preview = !self.settings.show_context_preview;
            }
            SettingsField::FocusGuide => {
                self.settings.show_focus_guide = !self.settings.show_focus_guide;
            }
        }
        self.persist_settings();
    }

    /// Applies a new rate to the engine and stores it as the preferred rate.
    pub(super) fn set_words_per_minute(&mut self, wpm: i32, now: Instant) {
        let wpm = clamp_wpm(wpm.clamp(0, i32::from(u16::MAX)) as u16);
        self.engine.set_words_per_minute(wpm, now);
        if self.settings.words_per_minute != wpm {
            self.settings.words_per_minute = wpm;
            self.persist_settings();
        }
    }

    fn persist_settings(&mut self) {
        if let Err(e) = self.settings_store.save(&self.settings) {
            warn!(path = %self.settings_store.path().display(), error = %e, "could not save settings");
            self.status = Some(format!("Could not save settings: {e}"));
        }
    }
}
