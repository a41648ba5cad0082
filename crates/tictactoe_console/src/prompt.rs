//! Player prompts: position entry and the replay question.

use crate::io::{InputReader, OutputWriter};
use std::borrow::Cow;
use std::io;
use std::num::IntErrorKind;
use tictactoe_engine::{Board, Position};
use tracing::{debug, instrument};

/// Prompt shown when asking for a position.
pub const POSITION_PROMPT: &str = "Where do you want to place your marker (1-9)";

/// Prompt shown after each game.
pub const REPLAY_PROMPT: &str = "Play again? (Y = Yes, Anything else = No)";

/// Why a typed position was rejected.
///
/// The display text is the message the player sees before being asked again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Input was not an integer.
    #[display("Invalid type. Please enter an integer number")]
    NotANumber,
    /// Integer outside 1-9.
    #[display("Invalid position")]
    OutOfRange(String),
    /// The cell already holds a mark.
    #[display("Position unavailable, please try again")]
    Occupied(Position),
}

impl std::error::Error for InputError {}

/// Removes `_` digit separators, which may only sit between two digits.
///
/// Returns `None` for a misplaced separator such as `_5`, `5_` or `5__0`.
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }
    let digits = text.trim_start_matches(['+', '-']);
    let between_digits = digits.split('_').all(|group| {
        !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit())
    });
    between_digits.then(|| Cow::Owned(text.replace('_', "")))
}

/// Classifies one line of player input against the board.
///
/// Integers follow the usual written forms: surrounding whitespace, an
/// optional sign and `_` between digits are accepted.
#[instrument(skip(board))]
pub fn parse_position(input: &str, board: &Board) -> Result<Position, InputError> {
    let trimmed = input.trim();
    let digits = strip_digit_separators(trimmed).ok_or(InputError::NotANumber)?;
    let number = match digits.parse::<i64>() {
        Ok(n) => n,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Err(InputError::OutOfRange(trimmed.to_string()));
        }
        Err(_) => return Err(InputError::NotANumber),
    };

    let pos = usize::try_from(number)
        .ok()
        .and_then(Position::from_number)
        .ok_or_else(|| InputError::OutOfRange(trimmed.to_string()))?;

    if board.is_cell_empty(pos) {
        Ok(pos)
    } else {
        Err(InputError::Occupied(pos))
    }
}

/// Asks until the player names an empty cell.
#[instrument(skip(io, board))]
pub fn read_position<T>(io: &mut T, board: &Board) -> io::Result<Position>
where
    T: InputReader + OutputWriter,
{
    loop {
        let input = io.read_line(POSITION_PROMPT)?;
        match parse_position(&input, board) {
            Ok(pos) => return Ok(pos),
            Err(e) => {
                debug!(input = %input, error = ?e, "Rejected position");
                io.writeln(&e.to_string())?;
            }
        }
    }
}

/// True for exactly "y" or "yes", in any case. Padding counts as a no.
pub fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Asks whether to play another game.
#[instrument(skip(io))]
pub fn ask_replay<T: InputReader>(io: &mut T) -> io::Result<bool> {
    let answer = io.read_line(REPLAY_PROMPT)?;
    Ok(is_affirmative(&answer))
}
