//! The console session: one or more games between two players at one
//! keyboard.

use crate::config::ConsoleConfig;
use crate::display::{clear_screen, render_board};
use crate::io::{InputReader, OutputWriter};
use crate::prompt::{ask_replay, read_position};
use rand::Rng;
use std::fmt;
use tictactoe_engine::{GameFinished, GameResult, GameSetup, Mark, Move, Outcome};
use tracing::{debug, info, instrument};

/// Banner printed once at session start.
pub const WELCOME: &str = "Welcome to Tic Tac Toe\n\n";

/// Games won per mark and games drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Records one finished game.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Winner(Mark::X) => self.x_wins += 1,
            Outcome::Winner(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Games won by `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Games drawn.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Games played.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Games played: {}  X wins: {}  O wins: {}  Draws: {}",
            self.games(),
            self.x_wins,
            self.o_wins,
            self.draws
        )
    }
}

/// A run of games sharing one terminal, one random source and one
/// scoreboard.
pub struct Session<T, R> {
    io: T,
    rng: R,
    config: ConsoleConfig,
    scoreboard: Scoreboard,
}

impl<T, R> Session<T, R>
where
    T: InputReader + OutputWriter,
    R: Rng,
{
    /// Creates a session.
    pub fn new(io: T, rng: R, config: ConsoleConfig) -> Self {
        Self {
            io,
            rng,
            config,
            scoreboard: Scoreboard::default(),
        }
    }

    /// Results so far.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// The session's I/O.
    pub fn io(&self) -> &T {
        &self.io
    }

    /// Plays games until the players decline a replay.
    ///
    /// The scoreboard is printed when the session ends, including when input
    /// runs out mid-game; the I/O error is returned after it.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> std::io::Result<Scoreboard> {
        self.io.write(WELCOME)?;

        let played = self.play_rounds();
        let summary = self.io.writeln(&format!("\n{}", self.scoreboard));
        played.and(summary)?;
        Ok(self.scoreboard)
    }

    fn play_rounds(&mut self) -> std::io::Result<()> {
        let mut setup = self.new_game();
        loop {
            let finished = self.play_game(setup)?;
            self.scoreboard.record(finished.outcome());
            info!(outcome = ?finished.outcome(), scoreboard = %self.scoreboard, "Game over");

            if !ask_replay(&mut self.io)? {
                return Ok(());
            }
            debug!("Replay requested");
            setup = match self.config.first_mark() {
                Some(mark) => finished.restart_with(*mark),
                None => finished.restart(&mut self.rng),
            };
        }
    }

    /// Sets up the session's first game: the configured opener, or a draw.
    pub fn new_game(&mut self) -> GameSetup {
        match self.config.first_mark() {
            Some(mark) => GameSetup::new(*mark),
            None => GameSetup::draw(&mut self.rng),
        }
    }

    /// Plays a single game from an empty board to a win or draw.
    #[instrument(skip(self, setup), fields(first = %setup.first()))]
    pub fn play_game(&mut self, setup: GameSetup) -> std::io::Result<GameFinished> {
        info!(first = %setup.first(), "New game");
        self.io.write(&render_board(setup.board()))?;
        self.io.writeln(&format!("{} goes first", setup.first()))?;

        let mut game = setup.start();
        loop {
            let mark = game.to_move();
            self.io.writeln(&format!("\n\nPlayer {} :", mark))?;
            let position = read_position(&mut self.io, game.board())?;

            // read_position only returns empty cells for the mark on turn.
            let result = game
                .make_move(Move::new(mark, position))
                .map_err(std::io::Error::other)?;

            let board = match &result {
                GameResult::InProgress(g) => g.board(),
                GameResult::Finished(g) => g.board(),
            };
            self.io.write(&clear_screen(*self.config.clear_lines()))?;
            self.io.write(&render_board(board))?;

            match result {
                GameResult::InProgress(next) => game = next,
                GameResult::Finished(done) => {
                    self.io.writeln(&format!("\n{}", done.outcome()))?;
                    return Ok(done);
                }
            }
        }
    }
}
