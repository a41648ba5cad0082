//! Pure tic-tac-toe game logic.
//!
//! This crate holds the rules and nothing else: no terminal, no files.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Mark`] and [`Position`]
//! - **Rules**: win and draw detection over the eight lines
//! - **Coin**: the fair draw that decides who opens, and the [`TurnOrder`] it implies
//! - **Typestate**: [`GameSetup`] → [`GameInProgress`] → [`GameFinished`]
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameResult, GameSetup, Mark, Move, Position};
//!
//! let game = GameSetup::new(Mark::X).start();
//! let result = game.make_move(Move::new(Mark::X, Position::Center)).unwrap();
//! assert!(matches!(result, GameResult::InProgress(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod coin;
mod phases;
mod position;
pub mod rules;
mod types;
mod typestate;

pub use action::{Move, MoveError};
pub use coin::{FIRST_MARK_THRESHOLD, FIRST_MARK_RANGE, TurnOrder, choose_first_mark, turn_order};
pub use phases::Outcome;
pub use position::Position;
pub use rules::{check_win, check_winner, is_board_full, is_draw};
pub use types::{Board, Mark, Square};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
