//! Grid Games library - Tic-Tac-Toe and Connect Four game cores
//!
//! # Architecture
//!
//! - **Grid**: fixed-size board storage with bounds checks
//! - **Game**: turn and phase state machine shared by both games
//! - **Rulesets**: move resolution and win detection per game
//! - **TUI**: terminal front end that renders the board and status text
//!
//! # Example
//!
//! ```
//! use grid_games::connect_four::{Column, ConnectFour};
//! use grid_games::{Game, GameStatus, Seed};
//!
//! # fn main() -> Result<(), grid_games::MoveError> {
//! let mut game = Game::<ConnectFour>::new();
//! for col in [0, 1, 0, 1, 0, 1, 0] {
//!     game.make_move(Column::new(col)?)?;
//! }
//! assert_eq!(game.status(), GameStatus::Won(Seed::Cross));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Shared game core
pub use games::{
    Cell, Contract, Coord, Direction, Game, GameNotOver, GameStatus, Grid, Move, MoveContract,
    MoveError, PlayerNames, Ruleset, Seed, Selection, SelectionLocatable, longest_run, run_length,
};

// Crate-level exports - Individual games
pub use games::{connect_four, invariants, tictactoe};

// Crate-level exports - Terminal front end
pub use tui::{App, run_tui};
