//! Game phase and the outcome of an adapter selection.

use super::action::MoveError;
use super::types::Seed;
use serde::{Deserialize, Serialize};

/// Current phase of a game.
///
/// Leaves `InProgress` at most once per game; only a reset brings it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Seed),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Seed> {
        match self {
            GameStatus::Won(seed) => Some(*seed),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Returns true once the game has a result.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(seed) => write!(f, "Player {} wins", seed),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// What happened when the adapter forwarded a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The move was accepted; carries the resulting phase.
    Played(GameStatus),
    /// The move was refused; the game is unchanged.
    Rejected(MoveError),
    /// The game was over, so a new game was started instead.
    Restarted,
}
