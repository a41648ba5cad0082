//! Phase-specific typestate structs for tic-tac-toe.
//!
//! Each phase is its own type. A [`GameFinished`] always carries an
//! [`Outcome`], and only a [`GameInProgress`] accepts moves.

use super::action::{Move, MoveError};
use super::coin::{TurnOrder, choose_first_mark, turn_order};
use super::phases::Outcome;
use super::rules::{check_win, is_board_full};
use super::{Board, Mark, Position};
use rand::Rng;
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase: empty board, opening mark decided.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
    first: Mark,
}

impl GameSetup {
    /// Creates a game that `first` will open.
    #[instrument]
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            first,
        }
    }

    /// Creates a game whose opening mark is drawn from `rng`.
    #[instrument(skip(rng))]
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(choose_first_mark(rng))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark that opens this game.
    pub fn first(&self) -> Mark {
        self.first
    }

    /// Starts the game (consumes setup, returns in-progress).
    #[instrument(skip(self), fields(first = %self.first))]
    pub fn start(self) -> GameInProgress {
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            order: turn_order(self.first),
            to_move: self.first,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress: accepts moves.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    board: Board,
    history: Vec<Move>,
    order: TurnOrder,
    to_move: Mark,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// The target cell must be empty and the mark must be the one on turn.
    /// A win is checked before a full board, so a ninth move that completes
    /// a line is a win rather than a draw.
    #[instrument(skip(self), fields(mark = %action.mark, position = %action.position))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        if !self.board.is_cell_empty(action.position) {
            warn!("Square already occupied");
            return Err(MoveError::SquareOccupied(action.position));
        }
        if action.mark != self.to_move {
            warn!(expected = %self.to_move, "Move out of turn");
            return Err(MoveError::WrongMark(action.mark));
        }

        let mut game = self;
        game.board.place_mark(action.mark, action.position);
        game.history.push(action);
        debug!(turn = game.history.len(), "Mark placed");

        if check_win(&game.board, action.mark) {
            info!(winner = %action.mark, "Game won");
            return Ok(GameResult::Finished(game.finish(Outcome::Winner(action.mark))));
        }

        if is_board_full(&game.board) {
            info!("Game drawn");
            return Ok(GameResult::Finished(game.finish(Outcome::Draw)));
        }

        game.to_move = game.to_move.opponent();
        Ok(GameResult::InProgress(game))
    }

    fn finish(self, outcome: Outcome) -> GameFinished {
        GameFinished {
            board: self.board,
            history: self.history,
            first: self.order.first(),
            outcome,
        }
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The full turn order of this game.
    pub fn turn_order(&self) -> &TurnOrder {
        &self.order
    }

    /// Returns the empty positions.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Replays moves from an empty board opened by `first`.
    ///
    /// Moves after the game finishes are ignored.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(first: Mark, moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new(first).start();

        for action in moves {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished: outcome determined.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    first: Mark,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The mark that opened this game.
    pub fn first(&self) -> Mark {
        self.first
    }

    /// Discards the board and sets up a new game with a freshly drawn opener.
    #[instrument(skip(self, rng))]
    pub fn restart<R: Rng + ?Sized>(self, rng: &mut R) -> GameSetup {
        GameSetup::draw(rng)
    }

    /// Discards the board and sets up a new game opened by `first`.
    #[instrument(skip(self))]
    pub fn restart_with(self, first: Mark) -> GameSetup {
        GameSetup::new(first)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}
