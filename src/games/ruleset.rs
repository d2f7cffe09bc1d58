//! The seam between the shared state machine and each game's rules.

use super::action::MoveError;
use super::grid::Grid;
use super::types::{Coord, Seed};

/// Rules of a two-player grid game.
///
/// The shared [`Game`](super::Game) state machine owns turn order, phase
/// and history; a ruleset only says where a selection lands and whether
/// the last placement wins.
pub trait Ruleset: std::fmt::Debug + Clone + Copy + PartialEq + Eq {
    /// What a player selects on their turn.
    type Choice: Copy + std::fmt::Debug + std::fmt::Display + PartialEq + Eq;

    /// Human-readable game name.
    const NAME: &'static str;
    /// Board height.
    const ROWS: usize;
    /// Board width.
    const COLS: usize;
    /// Colour of a cross seed as RGB.
    const CROSS_RGB: (u8, u8, u8);
    /// Colour of a nought seed as RGB.
    const NOUGHT_RGB: (u8, u8, u8);

    /// Resolves a selection to the empty cell that will receive the seed.
    fn locate(board: &Grid, choice: Self::Choice) -> Result<Coord, MoveError>;

    /// Decides whether `seed`, just placed at `last`, wins the game.
    fn is_winning(board: &Grid, last: Coord, seed: Seed) -> bool;

    /// Every selection that [`Ruleset::locate`] would accept.
    fn legal_moves(board: &Grid) -> Vec<Self::Choice>;

    /// Translates a pointed-at cell into a selection.
    fn choice_at(cell: Coord) -> Option<Self::Choice>;

    /// Translates a 1-based number typed by a player into a selection.
    fn choice_from_number(number: usize) -> Option<Self::Choice>;
}
