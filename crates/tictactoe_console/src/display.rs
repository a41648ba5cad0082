//! Board rendering for the console.

use tictactoe_engine::{Board, Square};
use tracing::instrument;

/// Symbol drawn for an empty cell.
pub const EMPTY_SYMBOL: char = '-';

fn symbol(square: Square) -> String {
    match square {
        Square::Empty => EMPTY_SYMBOL.to_string(),
        Square::Occupied(mark) => mark.to_string(),
    }
}

/// Renders the board three cells per line, with a blank line between rows.
#[instrument(skip(board))]
pub fn render_board(board: &Board) -> String {
    let mut result = String::from("\n");
    for row in board.rows() {
        let cells: Vec<String> = row.iter().copied().map(symbol).collect();
        result.push_str(&cells.join("   "));
        result.push_str("\n\n");
    }
    result
}

/// Blank lines that push the previous board off screen.
pub fn clear_screen(lines: usize) -> String {
    "\n".repeat(lines)
}
