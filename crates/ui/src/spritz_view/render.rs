use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::layout::truncate_with_ellipsis;

use super::{progress_cells, word_start_x, SpritzView};

impl SpritzView<'_> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        f.render_widget(Block::default().bg(self.theme.bg), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_header(f, chunks[0]);
        self.render_word(f, chunks[1]);
        if self.settings.show_context_preview {
            self.render_context(f, chunks[2]);
        }
        self.render_progress(f, chunks[3]);
        self.render_status(f, chunks[4]);
    }

    fn render_header(&self, f: &mut Frame<'_>, area: Rect) {
        let text = self.notice.unwrap_or(self.title);
        let title = truncate_with_ellipsis(text, area.width as usize);
        let header = Paragraph::new(Line::styled(
            title,
            Style::default()
                .fg(self.theme.header_fg)
                .add_modifier(Modifier::BOLD),
        ))
        .bg(self.theme.header_bg)
        .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    fn render_word(&self, f: &mut Frame<'_>, area: Rect) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let pivot = self.engine.pivot();
        let word_y = area.y + area.height / 2;
        let center_x = area.x + area.width / 2;

        if self.settings.show_focus_guide {
            let guide = Style::default().fg(self.theme.muted);
            if word_y > area.y {
                let above = Rect::new(center_x, word_y - 1, 1, 1);
                f.render_widget(Paragraph::new(Span::styled("│", guide)), above);
            }
            if word_y + 1 < area.bottom() {
                let below = Rect::new(center_x, word_y + 1, 1, 1);
                f.render_widget(Paragraph::new(Span::styled("│", guide)), below);
            }
        }

        if pivot.is_empty() {
            return;
        }
        let start_x = word_start_x(area.x, area.width, pivot.before.width());
        let line = Line::from(vec![
            Span::styled(pivot.before, Style::default().fg(self.theme.fg)),
            Span::styled(
                pivot.pivot,
                Style::default()
                    .fg(self.theme.pivot)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(pivot.after, Style::default().fg(self.theme.fg)),
        ]);
        let word_area = Rect {
            x: start_x,
            y: word_y,
            width: area.right().saturating_sub(start_x),
            height: 1,
        };
        f.render_widget(Paragraph::new(line), word_area);
    }

    fn render_context(&self, f: &mut Frame<'_>, area: Rect) {
        let snippet = self.engine.context_snippet();
        let text = truncate_with_ellipsis(&snippet, area.width as usize);
        let paragraph = Paragraph::new(Line::styled(text, Style::default().fg(self.theme.muted)))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }

    fn render_progress(&self, f: &mut Frame<'_>, area: Rect) {
        let progress = self.engine.progress();
        let percentage = (progress * 100.0).round() as u32;
        let label = format!(" {percentage}%");
        let bar_width = (area.width as usize).saturating_sub(2 + label.len());
        let (filled, empty) = progress_cells(progress, bar_width);

        let progress_line = Line::from(vec![
            Span::styled("[", Style::default().fg(self.theme.muted)),
            Span::styled("▮".repeat(filled), Style::default().fg(self.theme.accent)),
            Span::styled("▯".repeat(empty), Style::default().fg(self.theme.muted)),
            Span::styled("]", Style::default().fg(self.theme.muted)),
            Span::styled(label, Style::default().fg(self.theme.footer_fg)),
        ]);
        f.render_widget(
            Paragraph::new(progress_line).alignment(Alignment::Center),
            area,
        );
    }

    fn render_status(&self, f: &mut Frame<'_>, area: Rect) {
        let status = Paragraph::new(Line::styled(
            self.status_text(),
            Style::default().fg(self.theme.footer_fg),
        ))
        .bg(self.theme.footer_bg)
        .alignment(Alignment::Center);
        f.render_widget(status, area);
    }
}
