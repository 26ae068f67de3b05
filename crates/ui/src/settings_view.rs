use ratatui::{prelude::*, widgets::*};
use reader_core::settings::Settings;

use crate::layout::centered_rect;
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsField {
    Theme,
    Speed,
    ContextPreview,
    FocusGuide,
}

impl SettingsField {
    pub const ALL: [SettingsField; 4] = [
        SettingsField::Theme,
        SettingsField::Speed,
        SettingsField::ContextPreview,
        SettingsField::FocusGuide,
    ];

    fn label(self) -> &'static str {
        match self {
            SettingsField::Theme => "Theme",
            SettingsField::Speed => "Speed",
            SettingsField::ContextPreview => "Context preview",
            SettingsField::FocusGuide => "Focus guide",
        }
    }

    fn value(self, settings: &Settings) -> String {
        let on_off = |b: bool| if b { "on" } else { "off" }.to_string();
        match self {
            SettingsField::Theme => settings.theme.label().to_string(),
            SettingsField::Speed => format!("{} WPM", settings.words_per_minute),
            SettingsField::ContextPreview => on_off(settings.show_context_preview),
            SettingsField::FocusGuide => on_off(settings.show_focus_guide),
        }
    }
}

/// Settings overlay; only tracks which row is highlighted.
#[derive(Default)]
pub struct SettingsView {
    pub selected: usize,
}

impl SettingsView {
    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        self.selected = (self.selected + 1).min(SettingsField::ALL.len() - 1);
    }

    pub fn field(&self) -> SettingsField {
        SettingsField::ALL[self.selected.min(SettingsField::ALL.len() - 1)]
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect, settings: &Settings, theme: &Theme) {
        let popup_area = centered_rect(50, 40, area);
        let items: Vec<ListItem> = SettingsField::ALL
            .iter()
            .map(|field| {
                ListItem::new(Line::from(format!(
                    "{:<16} {}",
                    field.label(),
                    field.value(settings)
                )))
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .title("Settings (j/k select, h/l change, Esc close)")
                    .borders(Borders::ALL),
            )
            .highlight_style(Style::default().bg(theme.accent).fg(theme.bg));
        let mut state = ListState::default().with_selected(Some(self.selected));
        f.render_widget(Clear, popup_area);
        f.render_stateful_widget(list, popup_area, &mut state);
    }
}
