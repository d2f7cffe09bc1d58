//! Win detection and move resolution for tic-tac-toe.

use super::position::Position;
use crate::games::action::MoveError;
use crate::games::grid::Grid;
use crate::games::ruleset::Ruleset;
use crate::games::types::{Cell, Coord, Seed};
use tracing::instrument;

/// The eight winning lines.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Tic-tac-toe rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicTacToe;

impl TicTacToe {
    fn line_is(board: &Grid, cells: impl IntoIterator<Item = Coord>, seed: Seed) -> bool {
        cells
            .into_iter()
            .all(|at| board.get(at) == Some(Cell::Occupied(seed)))
    }
}

impl Ruleset for TicTacToe {
    type Choice = Position;

    const NAME: &'static str = "Tic-Tac-Toe";
    const ROWS: usize = 3;
    const COLS: usize = 3;
    const CROSS_RGB: (u8, u8, u8) = (211, 45, 65);
    const NOUGHT_RGB: (u8, u8, u8) = (76, 181, 245);

    fn locate(board: &Grid, choice: Position) -> Result<Coord, MoveError> {
        let at = choice.coord();
        if board.is_empty(at) {
            Ok(at)
        } else {
            Err(MoveError::CellOccupied(at))
        }
    }

    /// Checks only the lines through `last`: its row, its column, and a
    /// diagonal when `last` lies on one.
    #[instrument(skip(board))]
    fn is_winning(board: &Grid, last: Coord, seed: Seed) -> bool {
        let Coord { row, col } = last;
        if row >= Self::ROWS || col >= Self::COLS {
            return false;
        }

        Self::line_is(board, (0..3).map(|c| Coord::new(row, c)), seed)
            || Self::line_is(board, (0..3).map(|r| Coord::new(r, col)), seed)
            || (row == col && Self::line_is(board, (0..3).map(|i| Coord::new(i, i)), seed))
            || (row + col == 2 && Self::line_is(board, (0..3).map(|i| Coord::new(i, 2 - i)), seed))
    }

    fn legal_moves(board: &Grid) -> Vec<Position> {
        Position::valid_moves(board)
    }

    fn choice_at(cell: Coord) -> Option<Position> {
        Position::from_coord(cell)
    }

    fn choice_from_number(number: usize) -> Option<Position> {
        number.checked_sub(1).and_then(Position::from_index)
    }
}

/// Checks if there is a winner anywhere on the board.
///
/// Returns `Some(seed)` for the first complete line found, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Grid) -> Option<Seed> {
    LINES.iter().find_map(|[a, b, c]| {
        let seed = board.get(a.coord())?.seed()?;
        let line = [a.coord(), b.coord(), c.coord()];
        TicTacToe::line_is(board, line, seed).then_some(seed)
    })
}
