//! Property tests for the tic-tac-toe rules.

use proptest::prelude::*;
use tictactoe_engine::rules::LINES;
use tictactoe_engine::{
    Board, Mark, Position, Square, check_win, is_board_full, turn_order,
};

fn mark_strategy() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

fn square_strategy() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Mark::X)),
        Just(Square::Occupied(Mark::O)),
    ]
}

fn board_from(squares: &[Square]) -> Board {
    let mut board = Board::new();
    for (pos, square) in Position::ALL.into_iter().zip(squares) {
        if let Square::Occupied(mark) = square {
            board.place_mark(*mark, pos);
        }
    }
    board
}

proptest! {
    /// Property: a board is full exactly when no cell is empty
    #[test]
    fn full_iff_no_empty_cell(squares in prop::collection::vec(square_strategy(), 9)) {
        let board = board_from(&squares);
        let expected = squares.iter().all(|s| *s != Square::Empty);
        prop_assert_eq!(is_board_full(&board), expected);
    }

    /// Property: a filled line wins for its mark whatever the other six
    /// cells hold, and the opponent wins only with a line of its own
    #[test]
    fn filled_line_wins_amid_arbitrary_cells(
        line in 0..LINES.len(),
        mark in mark_strategy(),
        squares in prop::collection::vec(square_strategy(), 9),
    ) {
        let mut board = board_from(&squares);
        for pos in LINES[line] {
            board.place_mark(mark, pos);
        }
        prop_assert!(check_win(&board, mark));

        let opponent = Square::Occupied(mark.opponent());
        let opponent_owns_line = LINES
            .iter()
            .any(|l| l.iter().all(|&pos| board.get(pos) == opponent));
        prop_assert_eq!(check_win(&board, mark.opponent()), opponent_owns_line);
    }

    /// Property: a lone filled line never wins for the other mark
    #[test]
    fn lone_line_does_not_win_for_opponent(line in 0..LINES.len(), mark in mark_strategy()) {
        let mut board = Board::new();
        for pos in LINES[line] {
            board.place_mark(mark, pos);
        }
        prop_assert!(check_win(&board, mark));
        prop_assert!(!check_win(&board, mark.opponent()));
    }

    /// Property: a placed mark always occupies its cell
    #[test]
    fn placed_cell_is_not_empty(index in 0usize..9, mark in mark_strategy()) {
        let pos = Position::from_index(index).unwrap();
        let mut board = Board::new();
        board.place_mark(mark, pos);
        prop_assert!(!board.is_cell_empty(pos));
    }

    /// Property: turn order alternates and always has nine entries
    #[test]
    fn turn_order_alternates(first in mark_strategy()) {
        let order = turn_order(first);
        prop_assert_eq!(order.as_slice().len(), 9);
        prop_assert_eq!(order.first(), first);
        for pair in order.as_slice().windows(2) {
            prop_assert_ne!(pair[0], pair[1]);
        }
    }
}
