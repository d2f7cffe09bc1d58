//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::games::grid::Grid;
use crate::games::ruleset::Ruleset;
use crate::games::types::Cell;
use crate::games::Game;

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Verified by replaying the move history onto an empty grid and comparing.
pub struct MonotonicBoardInvariant;

impl<R: Ruleset> Invariant<Game<R>> for MonotonicBoardInvariant {
    fn holds(game: &Game<R>) -> bool {
        let board = game.board();
        let mut reconstructed = Grid::new(board.rows(), board.cols());

        for mov in game.history() {
            if !reconstructed.is_empty(mov.cell) {
                return false;
            }
            if reconstructed.set(mov.cell, Cell::Occupied(mov.seed)).is_err() {
                return false;
            }
        }

        reconstructed == *board
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::action::Move;
    use crate::games::tictactoe::{Position, TicTacToe};
    use crate::games::types::{Coord, Seed};

    #[test]
    fn test_empty_game_holds() {
        let game = Game::<TicTacToe>::new();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let game = Game::<TicTacToe>::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ])
        .unwrap();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut game = Game::<TicTacToe>::new();
        game.make_move(Position::Center).unwrap();
        game.board
            .set(Coord::new(1, 1), Cell::Occupied(Seed::Nought))
            .unwrap();
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_history_cell_violates() {
        let mut game = Game::<TicTacToe>::new();
        game.make_move(Position::Center).unwrap();
        game.history
            .push(Move::new(Seed::Nought, Position::Center, Coord::new(1, 1)));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
