use std::{
    io::stdout,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use reader_core::library::{LibraryStore, Storage};
use tracing::{debug, warn};

use crate::library_view::LibraryView;
use crate::spritz_view::SpritzView;

use super::types::{Command, CommandOutcome, Overlay, Screen};
use super::App;

/// Longest wait for input while no step is pending.
const IDLE_POLL: Duration = Duration::from_millis(100);

impl<S: Storage> App<S> {
    pub fn run(mut self) -> std::io::Result<()> {
        let mut stdout = stdout();
        let raw_ok = enable_raw_mode().is_ok();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        if !raw_ok {
            // Non-interactive fallback: draw once and exit cleanly
            terminal.draw(|f| self.draw(f))?;
            execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
            return Ok(());
        }

        debug!(entries = self.library.len(), "starting terminal ui");
        let mut exit = false;
        while !exit {
            terminal.draw(|f| self.draw(f))?;

            let timeout = self
                .engine
                .time_until_next_step(Instant::now())
                .map_or(IDLE_POLL, |due| due.min(IDLE_POLL));
            match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if let Some(command) = Command::from_key(&self, key) {
                            if self.apply_command(command, Instant::now()) == CommandOutcome::Exit {
                                exit = true;
                            }
                        }
                    }
                    Ok(Event::Paste(text)) => self.paste(&text),
                    Ok(_) => {}
                    Err(e) => {
                        warn!(error = %e, "terminal read failed");
                        exit = true;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    warn!(error = %e, "terminal poll failed");
                    exit = true;
                }
            }
            self.tick(Instant::now());
        }

        self.close_reader();
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
        Ok(())
    }

    pub fn draw(&self, f: &mut Frame<'_>) {
        let area = f.area();
        match self.screen {
            Screen::Library => self.draw_library(f, area),
            Screen::Reader => self.draw_reader(f, area),
            Screen::Document => {
                let resource = self.selection.id().and_then(|id| self.resources.get(id));
                match resource {
                    Some(resource) => self.document.render(f, area, resource, &self.theme),
                    None => self.draw_reader(f, area),
                }
            }
        }
        match &self.overlay {
            Some(Overlay::Import(prompt)) => prompt.render(f, area),
            Some(Overlay::ConfirmDelete { view, .. }) => view.render(f, area),
            Some(Overlay::Settings(view)) => view.render(f, area, &self.settings, &self.theme),
            Some(Overlay::EntryForm { form, .. }) => form.render(f, area),
            None => {}
        }
    }

    fn draw_library(&self, f: &mut Frame<'_>, area: Rect) {
        let view = LibraryView {
            entries: self.library.list(),
            cursor: self.cursor,
            theme: &self.theme,
            status: self.status.as_deref(),
        };
        view.render(f, area);
    }

    fn draw_reader(&self, f: &mut Frame<'_>, area: Rect) {
        let title = self.active_entry().map(|e| e.title.as_str()).unwrap_or("");
        let mut view = SpritzView::new(&self.engine, title, &self.settings, &self.theme);
        view.notice = self.status.as_deref();
        view.render(f, area);
    }
}
