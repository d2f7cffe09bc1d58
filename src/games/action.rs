//! First-class move records and move errors.
//!
//! A move remembers who played, what they selected, and where the seed
//! landed. For tic-tac-toe the selection and the landing cell coincide; for
//! Connect Four the selection is a column and gravity picks the row.

use super::types::{Coord, Seed};
use serde::{Deserialize, Serialize};

/// An accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move<C> {
    /// The seed that was placed.
    pub seed: Seed,
    /// The selection the player made.
    pub choice: C,
    /// The cell that received the seed.
    pub cell: Coord,
}

impl<C> Move<C> {
    /// Creates a new move record.
    pub fn new(seed: Seed, choice: C, cell: Coord) -> Self {
        Self { seed, choice, cell }
    }
}

impl<C: std::fmt::Display> std::fmt::Display for Move<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} at {}", self.seed, self.choice, self.cell)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already over; reset before playing again.
    #[display("Game is already over")]
    GameOver,

    /// The coordinate lies outside the board.
    #[display("Cell ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// The column index does not exist.
    #[display("Column {} does not exist", _0)]
    ColumnOutOfRange(usize),

    /// The column has no empty cell left.
    #[display("Column {} is full", _0)]
    ColumnFull(usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
