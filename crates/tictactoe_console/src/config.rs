//! Console configuration.
//!
//! Values come from an optional TOML file, then command-line flags override
//! them.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::Mark;
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given. Absence is not an error.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Settings for a console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Opening mark for every game. Drawn at random when unset.
    first_mark: Option<Mark>,

    /// Seed for the first-mark draw, for reproducible sessions.
    seed: Option<u64>,

    /// Blank lines printed before each redraw of the board.
    clear_lines: usize,

    /// Log filter used when `RUST_LOG` is not set.
    log_filter: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            first_mark: None,
            seed: None,
            clear_lines: 100,
            log_filter: "warn".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration for a command line.
    ///
    /// An explicit `--config` path must exist. Without one, the default path
    /// is used if present, otherwise defaults apply. Flags win over the file.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match ConfigSource::for_cli(cli) {
            ConfigSource::Explicit(path) | ConfigSource::DefaultFile(path) => {
                Self::from_file(path)?
            }
            ConfigSource::BuiltIn => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    /// Applies command-line flags on top of this configuration.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(mark) = cli.first {
            self.first_mark = Some(mark);
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(lines) = cli.clear_lines {
            self.clear_lines = lines;
        }
        self
    }

    /// Sets the opening mark.
    pub fn with_first_mark(mut self, mark: Option<Mark>) -> Self {
        self.first_mark = mark;
        self
    }

    /// Sets the number of blank lines printed before each redraw.
    pub fn with_clear_lines(mut self, lines: usize) -> Self {
        self.clear_lines = lines;
        self
    }
}

/// Where the configuration file comes from.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigSource {
    /// Given with `--config`.
    #[display("{}", _0.display())]
    Explicit(PathBuf),
    /// Found at [`DEFAULT_CONFIG_PATH`].
    #[display("{}", _0.display())]
    DefaultFile(PathBuf),
    /// No file; built-in defaults.
    #[display("built-in defaults")]
    BuiltIn,
}

impl ConfigSource {
    /// Picks the config file for a command line.
    pub fn for_cli(cli: &Cli) -> Self {
        match &cli.config {
            Some(path) => ConfigSource::Explicit(path.clone()),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                ConfigSource::DefaultFile(PathBuf::from(DEFAULT_CONFIG_PATH))
            }
            None => ConfigSource::BuiltIn,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
