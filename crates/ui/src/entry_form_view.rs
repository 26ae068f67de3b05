use ratatui::{prelude::*, widgets::*};
use unicode_segmentation::UnicodeSegmentation;

use crate::layout::popup_rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Title,
    Content,
}

/// Title and body editor used to add or edit a text entry.
///
/// The buffers survive a rejected submit so nothing typed is lost.
pub struct EntryFormView {
    pub heading: &'static str,
    pub title: String,
    pub content: String,
    pub field: FormField,
    pub error: Option<String>,
}

impl EntryFormView {
    pub fn new(heading: &'static str) -> Self {
        Self::with_values(heading, "", "")
    }

    pub fn with_values(heading: &'static str, title: &str, content: &str) -> Self {
        Self {
            heading,
            title: title.to_string(),
            content: content.to_string(),
            field: FormField::Title,
            error: None,
        }
    }

    fn focused(&mut self) -> &mut String {
        match self.field {
            FormField::Title => &mut self.title,
            FormField::Content => &mut self.content,
        }
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            FormField::Title => FormField::Content,
            FormField::Content => FormField::Title,
        };
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.error = None;
        self.focused().push(c);
    }

    /// Enter moves from the title to the body; in the body it starts a new line.
    pub fn enter(&mut self) {
        match self.field {
            FormField::Title => self.field = FormField::Content,
            FormField::Content => {
                self.error = None;
                self.content.push('\n');
            }
        }
    }

    /// Pasted text; line breaks are flattened in the single-line title.
    pub fn paste(&mut self, text: &str) {
        self.error = None;
        match self.field {
            FormField::Title => {
                let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
                self.title.push_str(&flat);
            }
            FormField::Content => self.content.push_str(&text.replace("\r\n", "\n")),
        }
    }

    pub fn backspace(&mut self) {
        self.error = None;
        let buffer = self.focused();
        if let Some((idx, _)) = buffer.grapheme_indices(true).last() {
            buffer.truncate(idx);
        }
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let popup_area = popup_rect(area, area.height.saturating_sub(4).clamp(7, 18));
        let block = Block::default()
            .title(format!("{} (Tab switch, Ctrl+S save, Esc cancel)", self.heading))
            .borders(Borders::ALL);
        let inner = block.inner(popup_area);
        f.render_widget(Clear, popup_area);
        f.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let label = |field: FormField, text: &'static str| {
            if self.field == field {
                let focus = Modifier::BOLD | Modifier::REVERSED;
                Span::styled(text, Style::default().add_modifier(focus))
            } else {
                Span::raw(text)
            }
        };

        let title_line = Line::from(vec![
            label(FormField::Title, "Title:"),
            Span::raw(format!(" {}", self.title)),
        ]);
        f.render_widget(Paragraph::new(title_line), chunks[0]);
        let body_label = Line::from(label(FormField::Content, "Text:"));
        f.render_widget(Paragraph::new(body_label), chunks[1]);

        let body = Paragraph::new(self.content.as_str()).wrap(Wrap { trim: false });
        f.render_widget(body, chunks[2]);

        if let Some(error) = &self.error {
            let line = Line::styled(error.as_str(), Style::default().fg(Color::Red));
            f.render_widget(Paragraph::new(line), chunks[3]);
        }
    }
}
