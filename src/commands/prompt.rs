//! Interactive questions asked by `remove`

use crate::error::{BgmusicError, Result};
use std::io::{self, BufRead, Write};

/// Source of answers for interactive commands
pub trait Prompt {
    /// Yes/no question, defaulting to no
    fn confirm(&mut self, message: &str) -> Result<bool>;

    /// Free-form answer, trimmed
    fn ask(&mut self, message: &str) -> Result<String>;
}

/// Prompt reading answers from a line-based input
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process's stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(BgmusicError::Aborted);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        loop {
            let answer = self.read_answer(&format!("{} [y/N]: ", message))?;
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "" | "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Error: invalid input")?,
            }
        }
    }

    fn ask(&mut self, message: &str) -> Result<String> {
        self.read_answer(&format!("{}: ", message))
    }
}
