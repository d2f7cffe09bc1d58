//! Connect Four: 6×7 board, seeds fall to the lowest empty row, four in a
//! row wins.

mod column;
mod rules;

pub use column::Column;
pub use rules::{ConnectFour, WIN_LENGTH};

/// A Connect Four game.
pub type ConnectFourGame = crate::games::Game<ConnectFour>;
