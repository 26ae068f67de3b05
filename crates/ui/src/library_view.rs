use ratatui::{prelude::*, widgets::*};
use reader_core::types::TextEntry;
use unicode_segmentation::UnicodeSegmentation;

use crate::layout::truncate_with_ellipsis;
use crate::theme::Theme;

const DOC_MARKER: &str = "▤ ";
const TEXT_MARKER: &str = "  ";

/// Library screen: every entry with its progress, newest first.
pub struct LibraryView<'a> {
    pub entries: &'a [TextEntry],
    pub cursor: usize,
    pub theme: &'a Theme,
    pub status: Option<&'a str>,
}

impl LibraryView<'_> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        f.render_widget(Block::default().bg(self.theme.bg), area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.muted))
            .title(Line::styled(
                format!(" Library ({}) ", self.entries.len()),
                Style::default().fg(self.theme.header_fg),
            ));
        let max_w = chunks[0].width.saturating_sub(2) as usize;

        if self.entries.is_empty() {
            let hint = Paragraph::new("No entries yet. Press a to add text or i to import a document.")
                .style(Style::default().fg(self.theme.muted))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(hint, chunks[0]);
        } else {
            let items: Vec<ListItem> = self
                .entries
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    let style = if i == self.cursor {
                        Style::default().bg(self.theme.accent).fg(self.theme.bg)
                    } else {
                        Style::default().fg(self.theme.fg)
                    };
                    ListItem::new(Line::from(entry_line(entry, max_w))).style(style)
                })
                .collect();
            let mut state = ListState::default().with_selected(Some(self.cursor));
            f.render_stateful_widget(List::new(items).block(block), chunks[0], &mut state);
        }

        let footer = self
            .status
            .map(str::to_string)
            .unwrap_or_else(|| "Enter read  a add  e edit  i import  d delete  , settings  q quit".into());
        let footer = Paragraph::new(Line::styled(
            truncate_with_ellipsis(&footer, chunks[1].width as usize),
            Style::default().fg(self.theme.footer_fg),
        ))
        .bg(self.theme.footer_bg);
        f.render_widget(footer, chunks[1]);
    }
}

/// `marker title … NN%`, fitted to `max_w` columns.
pub(crate) fn entry_line(entry: &TextEntry, max_w: usize) -> String {
    if max_w == 0 {
        return String::new();
    }
    let marker = if entry.is_document {
        DOC_MARKER
    } else {
        TEXT_MARKER
    };
    let percent = format!("{:>3}%", entry.progress_percent());
    let fixed = marker.graphemes(true).count() + 1 + percent.len();
    let title_w = max_w.saturating_sub(fixed);
    let title = truncate_with_ellipsis(&entry.title, title_w);
    let pad = title_w.saturating_sub(title.graphemes(true).count());
    format!("{marker}{title}{} {percent}", " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use reader_core::types::EntryId;

    use super::*;

    fn entry(title: &str, content: &str, last_index: usize, is_document: bool) -> TextEntry {
        TextEntry {
            id: EntryId::from("e"),
            title: title.into(),
            content: content.into(),
            is_document,
            last_index,
            created_at: 0,
        }
    }

    #[test]
    fn line_shows_marker_title_and_progress() {
        let line = entry_line(&entry("Essay", "a b c d", 1, true), 20);
        assert_eq!(line, format!("▤ Essay{}25%", " ".repeat(10)));
        assert_eq!(line.graphemes(true).count(), 20);

        let line = entry_line(&entry("Note", "a b", 2, false), 12);
        assert_eq!(line, "  Note  100%");
    }

    #[test]
    fn long_titles_are_truncated() {
        let line = entry_line(&entry("A very long title indeed", "a", 0, false), 14);
        assert_eq!(line, "  A very…   0%");
    }
}
