#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Console front end for in-memory notes.
//!
//! `NoteConsole` holds the prompt/list/select operations over any
//! `BufRead`/`Write` pair, and `NoteSession` wraps them in the numbered
//! main menu the `notes` binary runs.

mod console;
mod session;

pub use console::{ConsoleError, NoteConsole};
pub use session::{MenuChoice, NoteSession, SessionSummary};
