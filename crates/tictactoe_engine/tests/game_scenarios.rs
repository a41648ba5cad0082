//! Scenario tests for whole games through the typestate API.

use tictactoe_engine::{
    Board, GameInProgress, GameResult, GameSetup, Mark, Move, MoveError, Outcome, Position,
    check_win, is_board_full,
};

#[test]
fn test_row_win_scenario() {
    let mut board = Board::new();
    for number in [1, 2, 3] {
        let pos = Position::from_number(number).unwrap();
        board.place_mark(Mark::X, pos);
    }
    assert!(check_win(&board, Mark::X));
}

#[test]
fn test_diagonal_win_scenario() {
    let mut board = Board::new();
    for number in [1, 5, 9] {
        let pos = Position::from_number(number).unwrap();
        board.place_mark(Mark::O, pos);
    }
    assert!(check_win(&board, Mark::O));
}

#[test]
fn test_draw_game() {
    use Position::*;
    // O X O / O X X / X O O is reached without either side completing a line.
    let moves = [
        Move::new(Mark::O, TopLeft),
        Move::new(Mark::X, TopCenter),
        Move::new(Mark::O, TopRight),
        Move::new(Mark::X, Center),
        Move::new(Mark::O, BottomCenter),
        Move::new(Mark::X, MiddleRight),
        Move::new(Mark::O, MiddleLeft),
        Move::new(Mark::X, BottomLeft),
        Move::new(Mark::O, BottomRight),
    ];

    let Ok(GameResult::Finished(done)) = GameInProgress::replay(Mark::O, &moves) else {
        panic!("Expected finished game");
    };
    assert_eq!(done.outcome(), &Outcome::Draw);
    assert!(is_board_full(done.board()));
    assert!(!check_win(done.board(), Mark::X));
    assert!(!check_win(done.board(), Mark::O));
}

#[test]
fn test_wrong_mark_rejected() {
    let game = GameSetup::new(Mark::X).start();
    let result = game.make_move(Move::new(Mark::O, Position::Center));
    assert!(matches!(result, Err(MoveError::WrongMark(Mark::O))));
}

#[test]
fn test_occupied_square_rejected() {
    let game = GameSetup::new(Mark::X).start();
    let Ok(GameResult::InProgress(game)) = game.make_move(Move::new(Mark::X, Position::Center))
    else {
        panic!("Unexpected finish");
    };

    let result = game.make_move(Move::new(Mark::O, Position::Center));
    assert!(matches!(
        result,
        Err(MoveError::SquareOccupied(Position::Center))
    ));
}

#[test]
fn test_win_stops_replay() {
    let moves = [
        Move::new(Mark::X, Position::TopLeft),
        Move::new(Mark::O, Position::Center),
        Move::new(Mark::X, Position::MiddleLeft),
        Move::new(Mark::O, Position::BottomRight),
        Move::new(Mark::X, Position::BottomLeft),
        // Ignored: the game is already over.
        Move::new(Mark::O, Position::TopRight),
    ];

    let Ok(GameResult::Finished(done)) = GameInProgress::replay(Mark::X, &moves) else {
        panic!("Expected finished game");
    };
    assert_eq!(done.outcome().winner(), Some(Mark::X));
    assert_eq!(done.history().len(), 5);
}

#[test]
fn test_move_error_messages() {
    assert_eq!(
        MoveError::SquareOccupied(Position::Center).to_string(),
        "Square Center is already occupied"
    );
    assert_eq!(MoveError::WrongMark(Mark::O).to_string(), "It's not O's turn");
}
