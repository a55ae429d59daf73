//! The read-dispatch-report loop.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use dm_core::GameState;
use tracing::debug;

use crate::registry::{Engine, SessionOutcome};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Input ran out.
    EndOfInput,
    /// The player typed `exit`.
    Exit,
    /// The player was defeated.
    GameOver,
}

/// Reads commands line by line and writes the replies.
///
/// Errors from commands are reported and the loop carries on; only I/O
/// failures on the streams themselves stop it early.
pub struct Repl<'e, R, W> {
    engine: &'e Engine,
    input: R,
    output: W,
    prompt: String,
}

impl<'e, R: BufRead, W: Write> Repl<'e, R, W> {
    /// Create a loop over the given streams.
    pub fn new(engine: &'e Engine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
            prompt: "> ".to_string(),
        }
    }

    /// Use a different prompt. An empty prompt prints nothing.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Run until end of input, `exit`, or defeat.
    pub fn run(&mut self, state: &mut GameState) -> io::Result<SessionEnd> {
        let mut buf = Vec::new();

        loop {
            if !self.prompt.is_empty() {
                write!(self.output, "{}", self.prompt)?;
                self.output.flush()?;
            }

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                return Ok(SessionEnd::EndOfInput);
            }

            let line = String::from_utf8_lossy(&buf);
            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            match self.engine.dispatch(state, input) {
                Ok(reply) => {
                    if !reply.text.is_empty() {
                        writeln!(self.output, "{}\n", reply.text)?;
                    }
                    match reply.outcome {
                        SessionOutcome::Continue => {}
                        SessionOutcome::Exit => return Ok(SessionEnd::Exit),
                        SessionOutcome::GameOver => return Ok(SessionEnd::GameOver),
                    }
                }
                Err(err) if err.is_domain() => {
                    writeln!(self.output, "{}\n", format!("Error: {err}").yellow())?;
                }
                Err(err) => {
                    writeln!(self.output, "{}\n", format!("Error: {err}").red())?;
                }
            }
        }
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
