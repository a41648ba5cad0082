//! Two-player tic-tac-toe at one terminal.
//!
//! The rules live in [`tictactoe_engine`]; this crate is the interaction
//! loop around them: prompting for positions, drawing the board, asking for
//! a replay and keeping score.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod display;
pub mod io;
pub mod logging;
pub mod prompt;
pub mod session;

pub use cli::Cli;
pub use config::{ConfigError, ConsoleConfig};
pub use io::{InputReader, OutputWriter, ScriptedIo, TerminalIo};
pub use prompt::InputError;
pub use session::{Scoreboard, Session};
