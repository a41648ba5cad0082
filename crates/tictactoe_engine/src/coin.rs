//! Deciding who opens, and the turn order that follows.

use super::types::Mark;
use rand::Rng;
use tracing::{debug, instrument};

/// Upper bound (exclusive) of the first-mark draw.
pub const FIRST_MARK_RANGE: u32 = 100;

/// Draws below this value give O the first move.
pub const FIRST_MARK_THRESHOLD: u32 = 50;

/// Draws the mark that opens the game.
///
/// A uniform integer in `[0, 100)` is drawn; below 50 O opens, otherwise X.
#[instrument(skip(rng))]
pub fn choose_first_mark<R: Rng + ?Sized>(rng: &mut R) -> Mark {
    let chance = rng.gen_range(0..FIRST_MARK_RANGE);
    let mark = if chance < FIRST_MARK_THRESHOLD {
        Mark::O
    } else {
        Mark::X
    };
    debug!(chance, %mark, "Drew first mark");
    mark
}

/// The nine alternating marks of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOrder {
    marks: [Mark; 9],
}

impl TurnOrder {
    /// Mark scheduled for the given zero-based turn.
    pub fn get(&self, turn: usize) -> Option<Mark> {
        self.marks.get(turn).copied()
    }

    /// The opening mark.
    pub fn first(&self) -> Mark {
        self.marks[0]
    }

    /// All nine marks.
    pub fn as_slice(&self) -> &[Mark] {
        &self.marks
    }
}

impl IntoIterator for TurnOrder {
    type Item = Mark;
    type IntoIter = std::array::IntoIter<Mark, 9>;

    fn into_iter(self) -> Self::IntoIter {
        self.marks.into_iter()
    }
}

/// Builds the turn order for a game opened by `first`.
#[instrument]
pub fn turn_order(first: Mark) -> TurnOrder {
    let marks = std::array::from_fn(|turn| {
        if turn % 2 == 0 {
            first
        } else {
            first.opponent()
        }
    });
    TurnOrder { marks }
}
