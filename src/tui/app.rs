//! Application state and key handling.

use super::input::move_cursor;
use crate::games::{Coord, Game, PlayerNames, Ruleset, Selection};
use crossterm::event::KeyCode;
use tracing::debug;

/// Main application state.
pub struct App<R: Ruleset> {
    game: Game<R>,
    names: PlayerNames,
    cursor: Coord,
    notice: Option<String>,
    should_quit: bool,
}

impl<R: Ruleset> App<R> {
    /// Creates a new application with a fresh game.
    pub fn new(names: PlayerNames) -> Self {
        Self {
            game: Game::new(),
            names,
            cursor: Coord::new(0, 0),
            notice: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status bar text, with the last rejection appended.
    pub fn status_line(&self) -> String {
        let status = self.game.status_message(&self.names);
        match &self.notice {
            Some(notice) => format!("{} ({})", status, notice),
            None => status,
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(R::choice_at(self.cursor)),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let number = c.to_digit(10).map(|d| d as usize);
                self.select(number.and_then(R::choice_from_number));
            }
            _ => self.cursor = move_cursor(self.cursor, key, R::ROWS, R::COLS),
        }
    }

    fn select(&mut self, choice: Option<R::Choice>) {
        let Some(choice) = choice else {
            return;
        };
        match self.game.handle_selection(choice) {
            Selection::Played(status) => {
                debug!(%choice, ?status, "Move applied to UI state");
                self.notice = None;
            }
            Selection::Rejected(e) => self.notice = Some(e.to_string()),
            Selection::Restarted => {
                self.notice = None;
                self.cursor = Coord::new(0, 0);
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.notice = None;
        self.cursor = Coord::new(0, 0);
    }
}
