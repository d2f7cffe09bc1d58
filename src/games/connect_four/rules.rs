//! Gravity drop and run-based win detection for Connect Four.

use super::column::Column;
use crate::games::action::MoveError;
use crate::games::grid::Grid;
use crate::games::ruleset::Ruleset;
use crate::games::scan;
use crate::games::types::{Coord, Seed};
use tracing::{instrument, trace};

/// Run length needed to win.
pub const WIN_LENGTH: usize = 4;

/// Connect Four rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectFour;

impl Ruleset for ConnectFour {
    type Choice = Column;

    const NAME: &'static str = "Connect Four";
    const ROWS: usize = 6;
    const COLS: usize = Column::COUNT;
    const CROSS_RGB: (u8, u8, u8) = (239, 105, 80);
    const NOUGHT_RGB: (u8, u8, u8) = (64, 154, 225);

    /// The seed lands in the lowest empty row of the column.
    fn locate(board: &Grid, choice: Column) -> Result<Coord, MoveError> {
        let col = choice.index();
        (0..board.rows())
            .rev()
            .map(|row| Coord::new(row, col))
            .find(|at| board.is_empty(*at))
            .ok_or(MoveError::ColumnFull(col))
    }

    /// Wins when the run through `last` reaches [`WIN_LENGTH`] in any direction.
    #[instrument(skip(board))]
    fn is_winning(board: &Grid, last: Coord, seed: Seed) -> bool {
        let longest = scan::longest_run(board, last, seed);
        trace!(longest, "Longest run through last move");
        longest >= WIN_LENGTH
    }

    fn legal_moves(board: &Grid) -> Vec<Column> {
        Column::all()
            .filter(|column| board.is_empty(Coord::new(0, column.index())))
            .collect()
    }

    fn choice_at(cell: Coord) -> Option<Column> {
        Column::new(cell.col).ok()
    }

    fn choice_from_number(number: usize) -> Option<Column> {
        number.checked_sub(1).and_then(|index| Column::new(index).ok())
    }
}
