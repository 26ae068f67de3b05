use std::{path::PathBuf, time::Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use reader_core::library::Storage;

use crate::prompt_view::PromptView;

use super::settings::WPM_STEP;
use super::types::{
    Command, CommandOutcome, FormCommand, Overlay, PromptCommand, Screen, SettingsCommand,
};
use super::App;

impl Command {
    pub(super) fn from_key<S: Storage>(app: &App<S>, key: KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Exit);
        }
        match &app.overlay {
            Some(Overlay::Import(_)) => {
                return match key.code {
                    KeyCode::Esc => Some(Command::Prompt(PromptCommand::Cancel)),
                    KeyCode::Enter => Some(Command::Prompt(PromptCommand::Submit)),
                    KeyCode::Backspace => Some(Command::Prompt(PromptCommand::Backspace)),
                    KeyCode::Char(c) => Some(Command::Prompt(PromptCommand::Insert(c))),
                    _ => None,
                };
            }
            Some(Overlay::EntryForm { .. }) => {
                let command = match key.code {
                    KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        FormCommand::Save
                    }
                    KeyCode::Esc => FormCommand::Cancel,
                    KeyCode::Tab | KeyCode::BackTab => FormCommand::NextField,
                    KeyCode::Enter => FormCommand::Enter,
                    KeyCode::Backspace => FormCommand::Backspace,
                    KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return None
                    }
                    KeyCode::Char(c) => FormCommand::Insert(c),
                    _ => return None,
                };
                return Some(Command::Form(command));
            }
            Some(Overlay::ConfirmDelete { .. }) => {
                return match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') => Some(Command::ConfirmDelete),
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                        Some(Command::CancelDelete)
                    }
                    _ => None,
                };
            }
            Some(Overlay::Settings(_)) => {
                let command = match key.code {
                    KeyCode::Esc | KeyCode::Char(',') => SettingsCommand::Close,
                    KeyCode::Char('k') | KeyCode::Up => SettingsCommand::Up,
                    KeyCode::Char('j') | KeyCode::Down => SettingsCommand::Down,
                    KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('-') => {
                        SettingsCommand::Change(-1)
                    }
                    KeyCode::Char('l')
                    | KeyCode::Right
                    | KeyCode::Char('+')
                    | KeyCode::Enter
                    | KeyCode::Char(' ') => SettingsCommand::Change(1),
                    _ => return None,
                };
                return Some(Command::Settings(command));
            }
            None => {}
        }

        match app.screen {
            Screen::Library => match key.code {
                KeyCode::Char('q') => Some(Command::Exit),
                KeyCode::Char('j') | KeyCode::Down => Some(Command::CursorDown),
                KeyCode::Char('k') | KeyCode::Up => Some(Command::CursorUp),
                KeyCode::Enter => Some(Command::OpenEntry),
                KeyCode::Char('a') => Some(Command::StartAdd),
                KeyCode::Char('e') => Some(Command::StartEdit),
                KeyCode::Char('i') => Some(Command::StartImport),
                KeyCode::Char('d') => Some(Command::RequestDelete),
                KeyCode::Char(',') => Some(Command::OpenSettings),
                _ => None,
            },
            Screen::Reader => match key.code {
                KeyCode::Char('q') => Some(Command::Exit),
                KeyCode::Char(' ') => Some(Command::TogglePlay),
                KeyCode::Char('b') | KeyCode::Left => Some(Command::SkipBack),
                KeyCode::Char('r') => Some(Command::Restart),
                KeyCode::Char('+') | KeyCode::Char('=') => Some(Command::AdjustWpm(WPM_STEP)),
                KeyCode::Char('-') | KeyCode::Char('_') => Some(Command::AdjustWpm(-WPM_STEP)),
                KeyCode::Char('v') => Some(Command::ToggleDocument),
                KeyCode::Char('e') => Some(Command::StartEdit),
                KeyCode::Char(',') => Some(Command::OpenSettings),
                KeyCode::Esc => Some(Command::Back),
                _ => None,
            },
            Screen::Document => match key.code {
                KeyCode::Char('q') => Some(Command::Exit),
                KeyCode::Char('v') | KeyCode::Esc => Some(Command::ToggleDocument),
                KeyCode::Char('n') | KeyCode::PageDown | KeyCode::Right => {
                    Some(Command::DocNextPage)
                }
                KeyCode::Char('p') | KeyCode::PageUp | KeyCode::Left => Some(Command::DocPrevPage),
                KeyCode::Char('j') | KeyCode::Down => Some(Command::DocScroll(1)),
                KeyCode::Char('k') | KeyCode::Up => Some(Command::DocScroll(-1)),
                _ => None,
            },
        }
    }
}

impl<S: Storage> App<S> {
    pub(super) fn apply_command(&mut self, command: Command, now: Instant) -> CommandOutcome {
        self.status = None;
        match command {
            Command::Exit => {
                self.close_reader();
                return CommandOutcome::Exit;
            }
            Command::Prompt(prompt) => self.apply_prompt_command(prompt),
            Command::Form(form) => self.apply_form_command(form, now),
            Command::Settings(settings) => self.apply_settings_command(settings, now),
            Command::ConfirmDelete => {
                if let Some(Overlay::ConfirmDelete { id, .. }) = self.overlay.take() {
                    self.delete_entry(&id);
                }
            }
            Command::CancelDelete => self.overlay = None,
            Command::OpenSettings => self.open_settings(),
            Command::CursorUp => self.move_cursor(-1),
            Command::CursorDown => self.move_cursor(1),
            Command::OpenEntry => self.open_selected(),
            Command::StartImport => {
                self.overlay = Some(Overlay::Import(PromptView::new("Import file")));
            }
            Command::StartAdd => self.start_add(),
            Command::StartEdit => self.start_edit(),
            Command::RequestDelete => self.request_delete(),
            Command::TogglePlay => self.engine.toggle_play(now),
            Command::SkipBack => self.engine.skip_back(now),
            Command::Restart => self.restart(),
            Command::AdjustWpm(delta) => {
                let target = i32::from(self.engine.words_per_minute()) + delta;
                self.set_words_per_minute(target, now);
            }
            Command::ToggleDocument => self.toggle_document(),
            Command::Back => self.close_reader(),
            Command::DocNextPage => {
                let resource = self.selection.id().and_then(|id| self.resources.get(id));
                if let Some(resource) = resource {
                    self.document.next_page(resource);
                }
            }
            Command::DocPrevPage => self.document.prev_page(),
            Command::DocScroll(lines) if lines < 0 => self.document.scroll_up(lines.unsigned_abs()),
            Command::DocScroll(lines) => self.document.scroll_down(lines.unsigned_abs()),
        }
        CommandOutcome::Continue
    }

    fn apply_prompt_command(&mut self, command: PromptCommand) {
        let Some(Overlay::Import(prompt)) = &mut self.overlay else {
            return;
        };
        match command {
            PromptCommand::Cancel => self.overlay = None,
            PromptCommand::Backspace => prompt.backspace(),
            PromptCommand::Insert(c) => prompt.push_char(c),
            PromptCommand::Submit => {
                let Some(path) = prompt.value().map(PathBuf::from) else {
                    return;
                };
                self.overlay = None;
                self.import_path(&path);
            }
        }
    }
}
