//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the typestate and the console can share them.

pub mod draw;
pub mod win;

pub use draw::{is_board_full, is_draw};
pub use win::{LINES, check_win, check_winner};
