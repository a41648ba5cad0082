//! Tic-tac-toe console entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_console::config::ConfigSource;
use tictactoe_console::{Cli, ConsoleConfig, Session, TerminalIo, logging};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let logs = logging::init();
    let config = ConsoleConfig::resolve(&cli)?;
    logs.apply_filter(config.log_filter())?;

    info!(source = %ConfigSource::for_cli(&cli), ?config, "Config resolved");

    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };

    let mut session = Session::new(TerminalIo, rng, config);
    match session.run() {
        Ok(scoreboard) => {
            info!(%scoreboard, "Session finished");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            // The scoreboard has already been printed by the session.
            warn!(scoreboard = %session.scoreboard(), "Input closed before the session ended");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
