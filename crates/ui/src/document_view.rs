use ratatui::{prelude::*, widgets::*};
use reader_core::ingest::DocumentResource;

use crate::theme::Theme;

/// Page-by-page view of an imported document's source text.
#[derive(Default)]
pub struct DocumentView {
    pub page: usize,
    pub scroll: u16,
}

impl DocumentView {
    pub fn next_page(&mut self, resource: &DocumentResource) {
        if self.page + 1 < resource.page_count() {
            self.page += 1;
            self.scroll = 0;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
            self.scroll = 0;
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect, resource: &DocumentResource, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        let page = self.page.min(resource.page_count().saturating_sub(1));
        let text = resource.pages.get(page).map(String::as_str).unwrap_or("");
        let file_name = resource
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let body = Paragraph::new(text)
            .style(Style::default().fg(theme.fg).bg(theme.bg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {file_name} ")),
            )
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0));
        f.render_widget(body, chunks[0]);

        let footer = Paragraph::new(Line::styled(
            format!(
                "Page {}/{}  n/p page  j/k scroll  v back",
                page + 1,
                resource.page_count().max(1)
            ),
            Style::default().fg(theme.footer_fg),
        ))
        .bg(theme.footer_bg);
        f.render_widget(footer, chunks[1]);
    }
}
