//! Config file loading.

use clap::Parser;
use std::io::Write;
use tictactoe_console::{Cli, ConsoleConfig};
use tictactoe_engine::Mark;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first_mark = \"X\"").unwrap();
    writeln!(file, "seed = 42").unwrap();
    writeln!(file, "clear_lines = 3").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();

    let config = ConsoleConfig::from_file(file.path()).unwrap();
    assert_eq!(config.first_mark(), &Some(Mark::X));
    assert_eq!(config.seed(), &Some(42));
    assert_eq!(*config.clear_lines(), 3);
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let cli = Cli::parse_from(["tictactoe", "--config", missing.to_str().unwrap()]);

    let err = ConsoleConfig::resolve(&cli).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_resolve_applies_flags_over_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first_mark = \"X\"").unwrap();
    writeln!(file, "clear_lines = 3").unwrap();

    let cli = Cli::parse_from([
        "tictactoe",
        "--config",
        file.path().to_str().unwrap(),
        "--first",
        "O",
        "--seed",
        "7",
    ]);
    let config = ConsoleConfig::resolve(&cli).unwrap();
    assert_eq!(config.first_mark(), &Some(Mark::O));
    assert_eq!(config.seed(), &Some(7));
    assert_eq!(*config.clear_lines(), 3);
}
