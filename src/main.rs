//! Grid Games - terminal front end.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use grid_games::connect_four::ConnectFour;
use grid_games::tictactoe::TicTacToe;
use grid_games::{AppConfig, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Command};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    // Log to a file so output does not interfere with the terminal UI
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(command = ?cli.command, "Starting Grid Games");

    match cli.command {
        Command::Tictactoe => run_tui::<TicTacToe>(&config),
        Command::ConnectFour => run_tui::<ConnectFour>(&config),
    }
}
