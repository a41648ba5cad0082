//! Input/output seams.
//!
//! The session talks to the player only through these traits, so tests can
//! script a whole session without a terminal.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::instrument;

/// Reads a line of player input.
pub trait InputReader {
    /// Prints `prompt` and reads one line, without the trailing newline.
    ///
    /// End of input is an [`io::ErrorKind::UnexpectedEof`] error.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Writes text for the player.
pub trait OutputWriter {
    /// Write a message without a newline.
    fn write(&mut self, message: &str) -> io::Result<()>;

    /// Write a message followed by a newline.
    fn writeln(&mut self, message: &str) -> io::Result<()> {
        self.write(message)?;
        self.write("\n")
    }
}

/// Terminal I/O over stdin and stdout.
#[derive(Debug, Default)]
pub struct TerminalIo;

impl InputReader for TerminalIo {
    #[instrument(skip(self))]
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{} ", prompt)?;
        stdout.flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "standard input closed",
            ));
        }
        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl OutputWriter for TerminalIo {
    fn write(&mut self, message: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(message.as_bytes())?;
        stdout.flush()
    }
}

/// Scripted I/O: answers prompts from a fixed list and records all output.
#[derive(Debug, Default)]
pub struct ScriptedIo {
    responses: VecDeque<String>,
    prompts: Vec<String>,
    output: String,
}

impl ScriptedIo {
    /// Creates scripted I/O that answers with `responses` in order.
    pub fn new<S: Into<String>>(responses: impl IntoIterator<Item = S>) -> Self {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            output: String::new(),
        }
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Every prompt shown so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Responses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl InputReader for ScriptedIo {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.responses.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "No more scripted responses")
        })
    }
}

impl OutputWriter for ScriptedIo {
    fn write(&mut self, message: &str) -> io::Result<()> {
        self.output.push_str(message);
        Ok(())
    }
}
