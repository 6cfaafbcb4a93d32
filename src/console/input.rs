//! Line-oriented console I/O shared by both games.

use super::style::{paint, Tone};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::fmt::Display;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use tracing::debug;

/// Input reader and output writer bundled with the color switch.
///
/// Generic over its streams so the shells run the same against a terminal
/// and against scripted buffers in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio(color: bool) -> Self {
        let stdin: Stdin = io::stdin();
        Console::new(stdin.lock(), io::stdout()).with_color(color)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line without its line terminator.
    ///
    /// End of input is reported as [`io::ErrorKind::UnexpectedEof`].
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "console input closed",
            ));
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Reads one line and parses its first token as an integer.
    ///
    /// Anything after the first token is discarded. A line that does not
    /// start with a number is consumed whole and yields `None` so the
    /// caller can re-prompt.
    pub fn read_number(&mut self) -> io::Result<Option<i64>> {
        let line = self.read_line()?;
        let parsed = line
            .split_whitespace()
            .next()
            .and_then(|token| token.parse().ok());
        if parsed.is_none() {
            debug!(input = %line, "discarded malformed numeric input");
        }
        Ok(parsed)
    }

    /// Writes `prompt` (no newline) and reads a number.
    pub fn prompt_number(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        self.write(prompt)?;
        self.read_number()
    }

    /// Writes `prompt` (no newline) and reads a free-text line.
    pub fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        self.write(prompt)?;
        self.read_line()
    }

    /// Writes text without a newline and flushes so prompts show up.
    pub fn write(&mut self, text: impl Display) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Writes a full line in the given tone.
    pub fn say_styled(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        let painted = self.paint(text, tone);
        self.say(painted)
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        paint(text, tone, self.color)
    }

    /// Clears the terminal. Skipped when color is off, since the output is
    /// then likely not a terminal.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        if !self.color {
            return Ok(());
        }
        queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        self.output.flush()
    }
}
