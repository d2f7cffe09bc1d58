//! Command-line interface for grid_games.

use clap::{Parser, Subcommand};

/// Grid Games - Tic-Tac-Toe and Connect Four in the terminal
#[derive(Parser, Debug)]
#[command(name = "grid_games")]
#[command(about = "Turn-based grid games for two players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (optional)
    #[arg(short, long, global = true, default_value = "grid_games.toml")]
    pub config: std::path::PathBuf,

    /// Game to play
    #[command(subcommand)]
    pub command: Command,
}

/// Available games
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play tic-tac-toe on a 3x3 board
    #[command(alias = "ttt")]
    Tictactoe,

    /// Play Connect Four on a 6x7 board
    #[command(alias = "c4")]
    ConnectFour,
}
