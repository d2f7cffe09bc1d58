//! Tic-tac-toe: 3×3 board, three in a row wins.

mod position;
mod rules;

pub use position::Position;
pub use rules::{check_winner, TicTacToe};

/// A tic-tac-toe game.
pub type TicTacToeGame = crate::games::Game<TicTacToe>;
