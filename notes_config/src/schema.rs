use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use notes_core::prompts::{DEFAULT_SEPARATOR_WIDTH, MAX_SEPARATOR_WIDTH};

const CONFIG_DIR_NAME: &str = "notes";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub console: ConsoleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    #[serde(default = "ConsoleConfig::default_separator_width")]
    pub separator_width: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            separator_width: Self::default_separator_width(),
        }
    }
}

impl ConsoleConfig {
    const fn default_separator_width() -> usize {
        DEFAULT_SEPARATOR_WIDTH
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "warn".to_string()
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR_NAME))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'notes init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config = Self::from_json(&content)?;

        Ok(config)
    }

    /// Load the config file, falling back to defaults when it is missing or unreadable.
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::or_default(Self::load())
    }

    /// Unwrap a [`Config::load`] result, logging why defaults are used on failure.
    #[must_use]
    pub fn or_default(loaded: anyhow::Result<Self>) -> Self {
        loaded.unwrap_or_else(|e| {
            tracing::warn!("Using default config: {e}");
            Self::default()
        })
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        validate_separator_width(self.console.separator_width)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, CONFIG_TEMPLATE)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Adjust the config file if needed");
        println!("   2. Run 'notes run' to start taking notes");
        println!();
        println!("🔧 Configuration options:");
        println!("   - console.separator_width: Width of the '=' page separator");
        println!("   - logging.level: Log filter used when RUST_LOG is unset");
        println!();
        Ok(())
    }
}

/// Check a page separator width against `1..=MAX_SEPARATOR_WIDTH`.
pub fn validate_separator_width(width: usize) -> anyhow::Result<()> {
    if !(1..=MAX_SEPARATOR_WIDTH).contains(&width) {
        anyhow::bail!("Separator width must be between 1 and {MAX_SEPARATOR_WIDTH}, got {width}");
    }
    Ok(())
}

const CONFIG_TEMPLATE: &str = r#"{
  "console": {
    "separator_width": 52
  },
  "logging": {
    "level": "warn"
  }
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_matches_defaults() {
        let config = Config::from_json(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config.console.separator_width, 52);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_console_section() {
        let config = Config::from_json(r#"{"console": {"separator_width": 10}}"#).unwrap();
        assert_eq!(config.console.separator_width, 10);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_zero_separator_width_is_rejected() {
        let result = Config::from_json(r#"{"console": {"separator_width": 0}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_oversized_separator_width_is_rejected() {
        let result = Config::from_json(r#"{"console": {"separator_width": 18446744073709551615}}"#);
        assert!(result.is_err());

        let result = Config::from_json(r#"{"console": {"separator_width": 1025}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_separator_width_bounds() {
        assert!(validate_separator_width(1).is_ok());
        assert!(validate_separator_width(MAX_SEPARATOR_WIDTH).is_ok());
        assert!(validate_separator_width(0).is_err());
        assert!(validate_separator_width(MAX_SEPARATOR_WIDTH + 1).is_err());
    }

    #[test]
    fn test_or_default_keeps_loaded_config() {
        let loaded = Config::from_json(r#"{"console": {"separator_width": 10}}"#);
        assert_eq!(Config::or_default(loaded).console.separator_width, 10);
    }

    #[test]
    fn test_or_default_falls_back_on_error() {
        let loaded = Config::from_json(r#"{"console": {"separator_width": 0}}"#);
        assert_eq!(Config::or_default(loaded), Config::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Config::from_json("{ not json").is_err());
    }
}
