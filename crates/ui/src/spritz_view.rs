mod render;

use reader_core::rsvp::PlaybackEngine;
use reader_core::settings::Settings;

use crate::theme::Theme;

/// Reader screen: one pivot-aligned word plus progress and status.
pub struct SpritzView<'a> {
    pub engine: &'a PlaybackEngine,
    pub title: &'a str,
    pub settings: &'a Settings,
    pub theme: &'a Theme,
    /// Shown in place of the title when set.
    pub notice: Option<&'a str>,
}

impl<'a> SpritzView<'a> {
    pub fn new(
        engine: &'a PlaybackEngine,
        title: &'a str,
        settings: &'a Settings,
        theme: &'a Theme,
    ) -> Self {
        Self {
            engine,
            title,
            settings,
            theme,
            notice: None,
        }
    }

    pub(crate) fn status_text(&self) -> String {
        let total = self.engine.word_count();
        let shown = if total == 0 {
            0
        } else {
            (self.engine.current_index() + 1).min(total)
        };
        format!(
            "{}  {} WPM  Word {}/{}",
            self.engine.state().label(),
            self.engine.words_per_minute(),
            shown,
            total
        )
    }
}

/// Column where a word starts so that its pivot lands on the center of
/// `width` columns beginning at `x`. `pivot_column` is the display width of
/// the text before the pivot.
pub(crate) fn word_start_x(x: u16, width: u16, pivot_column: usize) -> u16 {
    let center = x + width / 2;
    let offset = u16::try_from(pivot_column).unwrap_or(u16::MAX);
    center.saturating_sub(offset).max(x)
}

/// Filled and empty cell counts for a bar of `width` cells.
pub(crate) fn progress_cells(progress: f64, width: usize) -> (usize, usize) {
    let filled = ((width as f64) * progress.clamp(0.0, 1.0)).round() as usize;
    let filled = filled.min(width);
    (filled, width - filled)
}
