//! Tests for the tic-tac-toe state machine.

use grid_games::tictactoe::{Position, TicTacToe, TicTacToeGame, check_winner};
use grid_games::{Cell, Game, GameStatus, MoveError, PlayerNames, Seed, Selection};

#[test]
fn test_lifecycle() {
    let mut game = TicTacToeGame::new();
    assert_eq!(game.current_player(), Seed::Cross);
    assert_eq!(game.status(), GameStatus::InProgress);

    let status = game.make_move(Position::Center).expect("Valid move");
    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(game.current_player(), Seed::Nought);
    assert_eq!(
        game.board().get(Position::Center.coord()),
        Some(Cell::Occupied(Seed::Cross))
    );
}

#[test]
fn test_occupied_cell_rejected_without_change() {
    let mut game = Game::<TicTacToe>::new();
    game.make_move(Position::Center).unwrap();
    let before = game.clone();

    let result = game.make_move(Position::Center);
    assert!(matches!(result, Err(MoveError::CellOccupied(_))));
    assert_eq!(game, before);
}

#[test]
fn test_replay_from_history() {
    let game = Game::<TicTacToe>::replay(&[
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
        Position::TopRight,
        Position::BottomLeft,
    ])
    .expect("Valid replay");

    assert_eq!(game.history().len(), 5);
    assert_eq!(game.current_player(), Seed::Nought);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_win_detection() {
    let game = Game::<TicTacToe>::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight, // Cross wins top row
    ])
    .expect("Valid replay");

    assert_eq!(game.status(), GameStatus::Won(Seed::Cross));
    assert_eq!(check_winner(game.board()), Some(Seed::Cross));
    assert_eq!(game.current_player(), Seed::Cross);
}

#[test]
fn test_nought_wins_column() {
    let game = Game::<TicTacToe>::replay(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::Center,
        Position::BottomRight,
        Position::BottomCenter,
    ])
    .unwrap();
    assert_eq!(game.status(), GameStatus::Won(Seed::Nought));
}

#[test]
fn test_draw_detection() {
    let game = Game::<TicTacToe>::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopRight,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ])
    .expect("Valid replay");

    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.board().is_full());
    assert_eq!(check_winner(game.board()), None);
    assert_eq!(
        game.status_message(&PlayerNames::default()),
        "It's a Draw! Click to play again."
    );
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let game = Game::<TicTacToe>::replay(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ])
    .unwrap();
    assert_eq!(game.history().len(), 9);
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_win_on_last_cell_is_not_a_draw() {
    // X O X / O X O / O X X: the ninth move completes the main diagonal.
    let game = Game::<TicTacToe>::replay(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ])
    .unwrap();
    assert!(game.board().is_full());
    assert_eq!(game.status(), GameStatus::Won(Seed::Cross));
}

#[test]
fn test_no_moves_after_game_over() {
    let mut game = Game::<TicTacToe>::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight,
    ])
    .unwrap();

    assert_eq!(game.make_move(Position::BottomRight), Err(MoveError::GameOver));
    assert!(game.legal_moves().is_empty());
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_reset_starts_fresh() {
    let mut game = Game::<TicTacToe>::replay(&[Position::Center, Position::TopLeft]).unwrap();
    game.reset();
    assert_eq!(game, Game::<TicTacToe>::new());
    assert_eq!(game.legal_moves().len(), 9);
}

#[test]
fn test_status_messages() {
    let names = PlayerNames::default();
    let mut game = Game::<TicTacToe>::new();
    assert_eq!(game.status_message(&names), "Snowy's Turn");

    game.make_move(Position::Center).unwrap();
    assert_eq!(game.status_message(&names), "Stormy's Turn");

    let won = Game::<TicTacToe>::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::MiddleLeft,
        Position::BottomRight,
        Position::BottomCenter,
        Position::TopRight,
    ])
    .unwrap();
    assert_eq!(won.status(), GameStatus::Won(Seed::Nought));
    assert_eq!(won.status_message(&names), "Stormy Won! Click to play again.");
}

#[test]
fn test_handle_selection_restarts_after_game_over() {
    let mut game = Game::<TicTacToe>::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
    ])
    .unwrap();

    assert_eq!(
        game.handle_selection(Position::Center),
        Selection::Rejected(MoveError::CellOccupied(Position::Center.coord()))
    );
    assert_eq!(
        game.handle_selection(Position::TopRight),
        Selection::Played(GameStatus::Won(Seed::Cross))
    );
    assert_eq!(game.handle_selection(Position::Center), Selection::Restarted);
    assert!(game.history().is_empty());
    assert_eq!(game.current_player(), Seed::Cross);
}

#[test]
fn test_last_move_records_seed_and_cell() {
    let game = Game::<TicTacToe>::replay(&[Position::Center, Position::BottomRight]).unwrap();
    let last = game.last_move().expect("Two moves played");
    assert_eq!(last.seed, Seed::Nought);
    assert_eq!(last.choice, Position::BottomRight);
    assert_eq!(last.cell, Position::BottomRight.coord());
}
