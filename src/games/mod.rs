//! Game cores.
//!
//! Both games share the board storage, the turn/phase state machine and the
//! invariant checks; each supplies a [`Ruleset`] with its own move
//! resolution and win detection.

mod action;
mod contracts;
mod game;
mod grid;
mod phases;
mod ruleset;
mod scan;
mod types;

pub mod connect_four;
pub mod invariants;
pub mod tictactoe;

pub use action::{Move, MoveError};
pub use contracts::{Contract, GameNotOver, MoveContract, SelectionLocatable};
pub use game::Game;
pub use grid::Grid;
pub use phases::{GameStatus, Selection};
pub use ruleset::Ruleset;
pub use scan::{longest_run, run_length, Direction};
pub use types::{Cell, Coord, PlayerNames, Seed};
