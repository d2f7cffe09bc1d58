//! Turn and phase state machine shared by both games.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::grid::Grid;
use super::phases::{GameStatus, Selection};
use super::ruleset::Ruleset;
use super::types::{Cell, PlayerNames, Seed};
use tracing::{debug, info, instrument};

/// A game in any phase, parameterised by its rules.
///
/// Cross always moves first. Once the status leaves
/// [`GameStatus::InProgress`] every move is refused until [`Game::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game<R: Ruleset> {
    pub(crate) board: Grid,
    pub(crate) to_move: Seed,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move<R::Choice>>,
}

impl<R: Ruleset> Game<R> {
    /// Creates a new game with an empty board and Cross to move.
    #[instrument(fields(game = R::NAME))]
    pub fn new() -> Self {
        Self {
            board: Grid::new(R::ROWS, R::COLS),
            to_move: Seed::Cross,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// Returns the seed whose turn it is.
    ///
    /// After a win this is the winner; the turn does not pass on a
    /// finishing move.
    pub fn current_player(&self) -> Seed {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game has a result.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the accepted moves, oldest first.
    pub fn history(&self) -> &[Move<R::Choice>] {
        &self.history
    }

    /// Returns the most recent accepted move.
    pub fn last_move(&self) -> Option<&Move<R::Choice>> {
        self.history.last()
    }

    /// Returns the selections the current player may make.
    ///
    /// Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<R::Choice> {
        if self.is_over() {
            return Vec::new();
        }
        R::legal_moves(&self.board)
    }

    /// Plays the current seed at `choice`.
    ///
    /// Returns the status after the move. A refused move leaves the game
    /// untouched.
    #[instrument(skip(self), fields(game = R::NAME, seed = ?self.to_move))]
    pub fn make_move(&mut self, choice: R::Choice) -> Result<GameStatus, MoveError> {
        MoveContract::pre(&*self, &choice)?;
        let cell = R::locate(&self.board, choice)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let seed = self.to_move;
        self.board.set(cell, Cell::Occupied(seed))?;
        self.history.push(Move::new(seed, choice, cell));
        debug!(%cell, "Seed placed");

        if R::is_winning(&self.board, cell, seed) {
            self.status = GameStatus::Won(seed);
            info!(?seed, moves = self.history.len(), "Game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!(moves = self.history.len(), "Game drawn");
        } else {
            self.to_move = seed.opponent();
        }

        #[cfg(debug_assertions)]
        {
            if let Err(e) = MoveContract::post(&before, &*self) {
                *self = before;
                return Err(e);
            }
        }

        Ok(self.status)
    }

    /// Starts a new game in place.
    #[instrument(skip(self), fields(game = R::NAME))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.board.clear();
        self.to_move = Seed::Cross;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    /// Handles a selection coming from a front end.
    ///
    /// While the game runs the selection is played; once it is over any
    /// selection starts a new game.
    #[instrument(skip(self), fields(game = R::NAME))]
    pub fn handle_selection(&mut self, choice: R::Choice) -> Selection {
        if self.is_over() {
            self.reset();
            return Selection::Restarted;
        }
        match self.make_move(choice) {
            Ok(status) => Selection::Played(status),
            Err(e) => {
                debug!(error = %e, "Selection rejected");
                Selection::Rejected(e)
            }
        }
    }

    /// Status bar text for the current phase.
    pub fn status_message(&self, names: &PlayerNames) -> String {
        match self.status {
            GameStatus::InProgress => format!("{}'s Turn", names.name(self.to_move)),
            GameStatus::Won(seed) => format!("{} Won! Click to play again.", names.name(seed)),
            GameStatus::Draw => "It's a Draw! Click to play again.".to_string(),
        }
    }

    /// Replays selections from a fresh game.
    #[instrument(skip(choices), fields(game = R::NAME, count = choices.len()))]
    pub fn replay(choices: &[R::Choice]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for choice in choices {
            game.make_move(*choice)?;
        }
        Ok(game)
    }
}

impl<R: Ruleset> Default for Game<R> {
    fn default() -> Self {
        Self::new()
    }
}
