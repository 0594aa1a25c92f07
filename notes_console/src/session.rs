//! Interactive menu session.
//!
//! A session owns the note collection for the lifetime of the program run
//! and drives the console operations from a numbered menu.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use notes_core::NoteCollection;
use notes_core::prompts::{
    GOODBYE, MENU_CREATE, MENU_EXIT, MENU_LIST, MENU_PROMPT, MENU_VIEW, NO_NOTES, NOTE_NOT_FOUND,
    NOTE_SAVED, UNKNOWN_COMMAND,
};
use tracing::{debug, info};

use crate::console::{ConsoleError, NoteConsole};

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    List,
    View,
    Exit,
}

impl MenuChoice {
    /// Map a typed menu answer to a choice.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Create),
            "2" => Some(Self::List),
            "3" => Some(Self::View),
            "0" | "q" | "exit" | "quit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub notes_created: usize,
    pub commands_handled: usize,
}

/// Menu loop over an owned [`NoteCollection`].
pub struct NoteSession<R, W>
where
    R: BufRead,
    W: Write,
{
    console: NoteConsole<R, W>,
    notes: NoteCollection,
    summary: SessionSummary,
}

impl<R, W> NoteSession<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(console: NoteConsole<R, W>, notes: NoteCollection) -> Self {
        Self {
            console,
            notes,
            summary: SessionSummary::default(),
        }
    }

    #[must_use]
    pub const fn notes(&self) -> &NoteCollection {
        &self.notes
    }

    #[must_use]
    pub const fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// End the session and hand the collection back.
    #[must_use]
    pub fn into_notes(self) -> NoteCollection {
        self.notes
    }

    /// Run the menu until the user exits or input runs out.
    pub fn run_interactive(&mut self) -> Result<SessionSummary, ConsoleError> {
        loop {
            self.print_menu()?;

            let answer = match self.console.ask(MENU_PROMPT) {
                Ok(answer) => answer,
                Err(ConsoleError::EndOfInput) => break,
                Err(e) => return Err(e),
            };

            let Some(choice) = MenuChoice::parse(&answer) else {
                debug!("Unknown menu answer: {answer:?}");
                self.console.print_line(UNKNOWN_COMMAND)?;
                continue;
            };

            match self.handle(choice) {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) | Err(ConsoleError::EndOfInput) => break,
                Err(e) => return Err(e),
            }
        }

        self.console.print_line(GOODBYE)?;
        info!(
            "Session ended: {} notes created, {} commands, {} notes held",
            self.summary.notes_created,
            self.summary.commands_handled,
            self.notes.len()
        );

        Ok(self.summary)
    }

    /// Carry out a single menu choice.
    ///
    /// Only choices that complete without an error are counted in the summary.
    pub fn handle(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>, ConsoleError> {
        let flow = self.dispatch(choice)?;
        self.summary.commands_handled += 1;
        Ok(flow)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>, ConsoleError> {
        match choice {
            MenuChoice::Create => {
                let note = self.console.create_note()?;
                let number = self.notes.push(note);
                self.summary.notes_created += 1;
                info!("Created note #{number}");
                self.console.print_line(NOTE_SAVED)?;
            }
            MenuChoice::List => {
                if self.notes.is_empty() {
                    self.console.print_line(NO_NOTES)?;
                } else {
                    self.console.list_elements(self.notes.as_slice())?;
                }
            }
            MenuChoice::View => {
                if self.notes.is_empty() {
                    self.console.print_line(NO_NOTES)?;
                } else {
                    match self.console.get_note(self.notes.as_slice())? {
                        Some(note) => self.console.show_note(note)?,
                        None => self.console.print_line(NOTE_NOT_FOUND)?,
                    }
                }
            }
            MenuChoice::Exit => return Ok(ControlFlow::Break(())),
        }

        Ok(ControlFlow::Continue(()))
    }

    fn print_menu(&mut self) -> Result<(), ConsoleError> {
        self.console.limit_page()?;
        for line in [MENU_CREATE, MENU_LIST, MENU_VIEW, MENU_EXIT] {
            self.console.print_line(line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Create));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::List));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::View));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("quit"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("4"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }
}
