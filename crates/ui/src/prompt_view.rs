use ratatui::{prelude::*, widgets::*};
use unicode_segmentation::UnicodeSegmentation;

use crate::layout::popup_rect;

/// Single-line text input shown as a popup.
pub struct PromptView {
    pub title: &'static str,
    pub input: String,
}

impl PromptView {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            input: String::new(),
        }
    }

    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.input.grapheme_indices(true).last() {
            self.input.truncate(idx);
        }
    }

    /// Trimmed input, `None` when blank.
    pub fn value(&self) -> Option<&str> {
        Some(self.input.trim()).filter(|s| !s.is_empty())
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let popup_area = popup_rect(area, 3);
        let block = Block::default()
            .title(format!("{} (Enter submit, Esc cancel)", self.title))
            .borders(Borders::ALL);
        let prompt = Paragraph::new(format!("> {}", self.input)).block(block);
        f.render_widget(Clear, popup_area);
        f.render_widget(prompt, popup_area);
    }
}

/// Yes/no confirmation before deleting an entry.
pub struct ConfirmView {
    pub message: String,
}

impl ConfirmView {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let popup_area = popup_rect(area, 4);
        let block = Block::default()
            .title("Confirm (y / n)")
            .borders(Borders::ALL);
        let body = Paragraph::new(self.message.as_str())
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(Clear, popup_area);
        f.render_widget(body, popup_area);
    }
}
