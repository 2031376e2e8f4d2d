// App state and main event loop.
// Owns the project presenter and maps keyboard input onto it.

use std::io;
use std::sync::Arc;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::prelude::*;

use crate::config::Config;
use crate::projects::ProjectSource;
use crate::state::ProjectList;
use crate::ui;

/// Main application state.
pub struct App {
    /// Presenter for the featured project cards.
    pub projects: ProjectList,
    /// GitHub login whose projects are shown.
    pub owner: String,
    /// Link to the owner's GitHub profile.
    pub profile_url: String,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new(source: Arc<dyn ProjectSource>, config: &Config) -> Self {
        Self {
            projects: ProjectList::new(source, config.limit),
            owner: config.owner.clone(),
            profile_url: config.profile_url(),
            show_help: false,
            should_quit: false,
        }
    }

    /// Main event loop. Starts the first project request before drawing.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        self.projects.activate();
        while !self.should_quit {
            self.projects.poll();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.projects.retry(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Down | KeyCode::Char('j') => self.projects.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.projects.select_prev(),
            _ => {}
        }
    }
}
