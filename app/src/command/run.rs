use notes_config::{Config, validate_separator_width};
use notes_console::{NoteConsole, NoteSession};
use notes_core::NoteCollection;
use tracing::info;

/// Input parameters for the Run command strategy.
#[derive(Debug, Clone)]
pub struct RunInput {
    /// Effective configuration
    pub config: Config,
    /// Separator width from the command line, wins over the config file
    pub separator_width: Option<usize>,
}

/// Strategy for the interactive note menu.
///
/// Notes live only for the duration of the run: the session starts with an
/// empty collection and drops it on exit.
#[derive(Debug, Clone, Copy)]
pub struct RunStrategy;

impl super::CommandStrategy for RunStrategy {
    type Input = RunInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let separator_width = input
            .separator_width
            .unwrap_or(input.config.console.separator_width);
        validate_separator_width(separator_width)?;

        info!("Starting note session (separator width {separator_width})");

        let console = NoteConsole::stdio().with_separator_width(separator_width);
        let mut session = NoteSession::new(console, NoteCollection::new());
        let summary = session.run_interactive()?;

        info!(
            "Note session finished after {} commands",
            summary.commands_handled
        );
        Ok(())
    }
}
