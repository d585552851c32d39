//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::{DEFAULT_TURN_SECONDS, GameMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings read from `noughts.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct NoughtsConfig {
    /// Seconds a player has before the turn passes.
    #[serde(default = "default_turn_seconds")]
    turn_seconds: u32,

    /// Pause before the computer answers, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Mode used when the command line doesn't pick one.
    #[serde(default)]
    default_mode: GameMode,

    /// Where the terminal UI writes its logs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_turn_seconds() -> u32 {
    DEFAULT_TURN_SECONDS
}

fn default_computer_delay_ms() -> u64 {
    500
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

impl Default for NoughtsConfig {
    fn default() -> Self {
        Self {
            turn_seconds: default_turn_seconds(),
            computer_delay_ms: default_computer_delay_ms(),
            default_mode: GameMode::default(),
            log_file: default_log_file(),
        }
    }
}

impl NoughtsConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.turn_seconds == 0 {
            return Err(ConfigError::new(
                "turn_seconds must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = NoughtsConfig::from_toml("").unwrap();
        assert_eq!(config, NoughtsConfig::default());
        assert_eq!(*config.turn_seconds(), 10);
        assert_eq!(*config.computer_delay_ms(), 500);
        assert_eq!(*config.default_mode(), GameMode::HumanVsComputer);
    }

    #[test]
    fn test_partial_toml() {
        let config = NoughtsConfig::from_toml(
            r#"
            turn_seconds = 15
            default_mode = "human-vs-human"
            "#,
        )
        .unwrap();
        assert_eq!(*config.turn_seconds(), 15);
        assert_eq!(*config.default_mode(), GameMode::HumanVsHuman);
        assert_eq!(config.log_file(), &PathBuf::from("noughts.log"));
    }

    #[test]
    fn test_rejects_zero_turn() {
        let err = NoughtsConfig::from_toml("turn_seconds = 0").unwrap_err();
        assert!(err.message.contains("turn_seconds"));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(NoughtsConfig::from_toml(r#"default_mode = "easy""#).is_err());
    }
}
