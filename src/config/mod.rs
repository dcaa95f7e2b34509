//! # Configuration Management Module
//!
//! Loads, validates and writes the TextTrekkers configuration file.
//!
//! ## Configuration Structure
//!
//! - [`GameConfig`] - Window title and starting state of the door
//! - [`ShellConfig`] - Prompt text and shell meta-commands
//! - [`TranscriptConfig`] - Transcript export and size limit
//! - [`LoggingConfig`] - Log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use texttrekkers::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     println!("Title: {}", config.game.title);
//!
//!     Config::create_default("config.toml").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! title = "TextTrekkers"
//! door_starts_locked = false
//!
//! [shell]
//! prompt = "Enter your command:"
//! meta_commands = true
//!
//! [transcript]
//! max_entries = 0
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every section is optional; missing values fall back to [`Config::default`].
//! CLI flags take precedence over the file.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tokio::fs;

/// Reasons a loaded configuration is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("game.title must not be empty")]
    EmptyTitle,

    #[error("shell.prompt must not be empty")]
    EmptyPrompt,

    #[error("logging.level '{0}' is not one of off, error, warn, info, debug, trace")]
    InvalidLogLevel(String),

    #[error("transcript.file must not be empty when set")]
    EmptyTranscriptPath,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Banner printed when the shell starts.
    pub title: String,
    /// Whether the door is locked when a new game begins.
    pub door_starts_locked: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "TextTrekkers".to_string(),
            door_starts_locked: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellConfig {
    pub prompt: String,
    /// Handle `help`, `quit` and `exit` in the shell instead of passing them to the game.
    pub meta_commands: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "Enter your command:".to_string(),
            meta_commands: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct TranscriptConfig {
    /// Write the transcript here as JSON when the session ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Keep at most this many entries in memory (0 = unlimited).
    pub max_entries: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed log level; anything unparseable maps to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.level).unwrap_or(log::LevelFilter::Info)
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub shell: ShellConfig,
    pub transcript: TranscriptConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config
            .validate()
            .map_err(|e| anyhow!("Invalid config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// A file that exists but fails to parse or validate is still an error.
    pub async fn load_or_default(path: &str) -> Result<Self> {
        if fs::try_exists(path).await.unwrap_or(false) {
            Self::load(path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        Config::default().save(path).await
    }

    /// Write this configuration to `path` as TOML.
    pub async fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| anyhow!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.game.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        if self.shell.prompt.trim().is_empty() {
            return Err(ConfigError::EmptyPrompt);
        }
        if log::LevelFilter::from_str(&self.logging.level).is_err() {
            return Err(ConfigError::InvalidLogLevel(self.logging.level.clone()));
        }
        if matches!(self.transcript.file.as_deref(), Some(p) if p.trim().is_empty()) {
            return Err(ConfigError::EmptyTranscriptPath);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.game.title, "TextTrekkers");
        assert!(!config.game.door_starts_locked);
        assert_eq!(config.shell.prompt, "Enter your command:");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: Config = toml::from_str("[game]\ndoor_starts_locked = true\n").unwrap();
        assert!(config.game.door_starts_locked);
        assert_eq!(config.game.title, "TextTrekkers");
        assert!(config.shell.meta_commands);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn toml_round_trip() {
        let mut config = Config::default();
        config.transcript.file = Some("run.json".to_string());
        config.transcript.max_entries = 50;
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = Config::default();
        config.game.title = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigError::EmptyTitle));

        let mut config = Config::default();
        config.shell.prompt = String::new();
        assert_eq!(config.validate(), Err(ConfigError::EmptyPrompt));

        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidLogLevel("loud".to_string()))
        );

        let mut config = Config::default();
        config.transcript.file = Some(String::new());
        assert_eq!(config.validate(), Err(ConfigError::EmptyTranscriptPath));
    }

    #[test]
    fn level_filter_parses_case_insensitively() {
        let logging = LoggingConfig {
            level: "DEBUG".to_string(),
            file: None,
        };
        assert_eq!(logging.level_filter(), log::LevelFilter::Debug);
    }

    #[tokio::test]
    async fn load_or_default_without_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing.toml");
        let config = Config::load_or_default(path.to_str().unwrap()).await.unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn load_rejects_invalid_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();
        let err = Config::load(path.to_str().unwrap()).await.unwrap_err();
        assert!(err.to_string().contains("logging.level"), "got {}", err);
    }
}
