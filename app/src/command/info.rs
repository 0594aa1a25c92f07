use notes_config::Config;

/// Strategy for displaying configuration information.
///
/// Prints where the config file lives, whether it exists, and the values
/// the `run` command would use.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Config;

    fn execute(&self, config: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::config_path()?;

        println!("=== notes Configuration ===\n");

        println!("Config File:");
        println!("  Path: {}", config_path.display());
        println!(
            "  Status: {}",
            if config_path.exists() {
                "Found"
            } else {
                "Missing (using defaults)"
            }
        );
        println!();

        println!("Console:");
        println!("  Separator Width: {}", config.console.separator_width);
        println!();

        println!("Logging:");
        println!("  Level: {}", config.logging.level);
        match std::env::var("RUST_LOG") {
            Ok(filter) => println!("  RUST_LOG: {filter} (overrides level)"),
            Err(_) => println!("  RUST_LOG: (not set)"),
        }

        Ok(())
    }
}
