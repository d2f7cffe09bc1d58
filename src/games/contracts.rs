//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} move {Q}.

use super::action::MoveError;
use super::game::Game;
use super::invariants::{GridGameInvariants, InvariantSet};
use super::ruleset::Ruleset;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has no result yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] once the game has a result.
    #[instrument(skip(game))]
    pub fn check<R: Ruleset>(game: &Game<R>) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the selection resolves to an empty cell.
pub struct SelectionLocatable;

impl SelectionLocatable {
    /// Fails with the ruleset's own error when the selection cannot be played.
    #[instrument(skip(game))]
    pub fn check<R: Ruleset>(choice: &R::Choice, game: &Game<R>) -> Result<(), MoveError> {
        R::locate(game.board(), *choice).map(|_| ())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is not over
/// - Selection lands on an empty cell
///
/// Postconditions:
/// - Exactly one move was recorded
/// - Board remains monotonic
/// - Seeds still alternate
/// - History remains consistent with board
pub struct MoveContract;

impl<R: Ruleset> Contract<Game<R>, R::Choice> for MoveContract {
    fn pre(game: &Game<R>, action: &R::Choice) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        SelectionLocatable::check(action, game)
    }

    fn post(before: &Game<R>, after: &Game<R>) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "History did not grow by one move"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history did not grow by one move".to_string(),
            ));
        }

        GridGameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Position, TicTacToe};
    use crate::games::types::{Cell, Coord, Seed};

    #[test]
    fn test_precondition_empty_square() {
        let game = Game::<TicTacToe>::new();
        assert!(MoveContract::pre(&game, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = Game::<TicTacToe>::new();
        game.make_move(Position::Center).unwrap();
        assert!(matches!(
            MoveContract::pre(&game, &Position::Center),
            Err(MoveError::CellOccupied(_))
        ));
    }

    #[test]
    fn test_precondition_game_over() {
        let game = Game::<TicTacToe>::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ])
        .unwrap();
        assert_eq!(
            MoveContract::pre(&game, &Position::BottomRight),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Game::<TicTacToe>::new();
        let mut after = before.clone();
        after.make_move(Position::Center).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Game::<TicTacToe>::new();
        let mut after = before.clone();
        after.make_move(Position::Center).unwrap();

        after
            .board
            .set(Coord::new(0, 0), Cell::Occupied(Seed::Nought))
            .unwrap();

        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_requires_one_new_move() {
        let before = Game::<TicTacToe>::new();
        let after = before.clone();
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
