#![deny(
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

use clap::{Parser, Subcommand};
use notes_config::{Config, LoggingConfig};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{CommandStrategy, InfoStrategy, InitStrategy, RunInput, RunStrategy, VersionStrategy};

#[derive(Parser)]
#[command(name = "notes")]
#[command(about = "Console note-taking utility", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive note menu (default)
    Run {
        /// Override the width of the page separator
        #[arg(short = 'w', long)]
        separator_width: Option<usize>,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging is configured from the file, so load it before the subscriber exists
    let loaded = Config::load();
    let level = loaded.as_ref().map_or_else(
        |_| LoggingConfig::default().level,
        |config| config.logging.level.clone(),
    );
    init_logging(&level)?;
    debug!("Log filter: {level}");

    match cli.command.unwrap_or(Commands::Run {
        separator_width: None,
    }) {
        Commands::Run { separator_width } => {
            RunStrategy.execute(RunInput {
                config: Config::or_default(loaded),
                separator_width,
            })?;
        }
        Commands::Init => InitStrategy.execute(())?,
        Commands::Info => InfoStrategy.execute(Config::or_default(loaded))?,
        Commands::Version => VersionStrategy.execute(())?,
    }

    Ok(())
}
