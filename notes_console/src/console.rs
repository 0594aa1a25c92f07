//! Line-oriented console for creating, listing and picking notes.
//!
//! `NoteConsole` is generic over its input and output streams so the same
//! code drives the real terminal and in-memory buffers.

use std::io::{BufRead, StdinLock, StdoutLock, Write};

use notes_core::prompts::{
    DEFAULT_SEPARATOR_WIDTH, MAX_SEPARATOR_WIDTH, NOTE_NUMBER_PROMPT, SEPARATOR_CHAR, TEXT_PROMPT, TITLE_PROMPT,
};
use notes_core::{Note, parse_selection};
use thiserror::Error;
use tracing::debug;

/// Errors raised while talking to the console streams.
///
/// An invalid selection is not an error; see [`NoteConsole::get_note`].
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input stream closed")]
    EndOfInput,
}

/// Console front end for notes.
pub struct NoteConsole<R = StdinLock<'static>, W = StdoutLock<'static>>
where
    R: BufRead,
    W: Write,
{
    input: R,
    output: W,
    separator: String,
}

impl NoteConsole {
    /// Bind the console to the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout().lock())
    }
}

impl<R, W> NoteConsole<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            separator: build_separator(DEFAULT_SEPARATOR_WIDTH),
        }
    }

    /// Set how many `=` characters the page separator is drawn with.
    ///
    /// The width is clamped to `1..=MAX_SEPARATOR_WIDTH`.
    #[must_use]
    pub fn with_separator_width(mut self, width: usize) -> Self {
        self.separator = build_separator(width);
        self
    }

    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Prompt for a title and a text and build a note from them verbatim.
    ///
    /// The note is not stored anywhere; appending it to a collection is the
    /// caller's job.
    pub fn create_note(&mut self) -> Result<Note, ConsoleError> {
        let title = self.ask(TITLE_PROMPT)?;
        let text = self.ask(TEXT_PROMPT)?;
        Ok(Note { title, text })
    }

    /// Print one `"{number}) {title}"` line per note, numbered from 1.
    pub fn list_elements(&mut self, elements: &[Note]) -> Result<(), ConsoleError> {
        for (number, element) in (1_usize..).zip(elements) {
            writeln!(self.output, "{number}) {}", element.title)?;
        }
        Ok(())
    }

    /// List `notes`, ask for a number and return the matching note.
    ///
    /// Returns `Ok(None)` when the answer is not a plain decimal number in
    /// `1..=notes.len()`. Nothing is printed and nothing is retried in that
    /// case.
    pub fn get_note<'a>(&mut self, notes: &'a [Note]) -> Result<Option<&'a Note>, ConsoleError> {
        self.list_elements(notes)?;
        let answer = self.ask(NOTE_NUMBER_PROMPT)?;

        let selected = parse_selection(&answer, notes.len()).and_then(|index| notes.get(index));
        if selected.is_none() {
            debug!("Rejected selection {answer:?} for {} notes", notes.len());
        }
        Ok(selected)
    }

    /// Print the page separator line.
    pub fn limit_page(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", self.separator)?;
        Ok(())
    }

    /// Print a note's title and text framed by separators.
    pub fn show_note(&mut self, note: &Note) -> Result<(), ConsoleError> {
        self.limit_page()?;
        writeln!(self.output, "{}", note.title)?;
        writeln!(self.output, "{}", note.text)?;
        self.limit_page()
    }

    pub fn print_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Write `prompt` without a newline, then read one line of input.
    pub fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line with its line terminator removed.
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

fn build_separator(width: usize) -> String {
    std::iter::repeat_n(SEPARATOR_CHAR, width.clamp(1, MAX_SEPARATOR_WIDTH)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_keeps_inner_whitespace() {
        let mut out = Vec::new();
        let mut console = NoteConsole::new(Cursor::new("  padded title \r\n"), &mut out);

        assert_eq!(console.ask("").unwrap(), "  padded title ");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut out = Vec::new();
        let mut console = NoteConsole::new(Cursor::new("tail"), &mut out);

        assert_eq!(console.ask("").unwrap(), "tail");
        assert!(matches!(console.ask(""), Err(ConsoleError::EndOfInput)));
    }

    #[test]
    fn test_default_separator() {
        let console = NoteConsole::new(Cursor::new(""), Vec::new());
        assert_eq!(console.separator(), "=".repeat(52));
    }

    #[test]
    fn test_separator_width_never_zero() {
        let console = NoteConsole::new(Cursor::new(""), Vec::new()).with_separator_width(0);
        assert_eq!(console.separator(), "=");
    }

    #[test]
    fn test_separator_width_is_capped() {
        let console =
            NoteConsole::new(Cursor::new(""), Vec::new()).with_separator_width(usize::MAX);
        assert_eq!(console.separator().len(), MAX_SEPARATOR_WIDTH);
    }
}
