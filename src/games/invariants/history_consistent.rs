//! History consistency invariant: history matches occupied cells.

use super::Invariant;
use crate::games::ruleset::Ruleset;
use crate::games::types::Cell;
use crate::games::Game;

/// Invariant: History length equals number of occupied cells, and each
/// recorded cell still holds the seed that was played there.
pub struct HistoryConsistentInvariant;

impl<R: Ruleset> Invariant<Game<R>> for HistoryConsistentInvariant {
    fn holds(game: &Game<R>) -> bool {
        let board = game.board();
        board.occupied() == game.history().len()
            && game
                .history()
                .iter()
                .all(|mov| board.get(mov.cell) == Some(Cell::Occupied(mov.seed)))
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
