use chatmark_engine::{ChatSession, Chip};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Output format for rendered messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Html,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Helper chips shown on an empty chat.
    pub suggestion_count: usize,
    /// Messages kept in session history.
    pub max_messages: usize,
    pub output: OutputFormat,
    /// TOML file with a custom `[[chips]]` pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion_pool: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suggestion_count: 3,
            max_messages: chatmark_engine::session::DEFAULT_MAX_MESSAGES,
            output: OutputFormat::default(),
            suggestion_pool: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PoolFile {
    chips: Vec<Chip>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the configured pool path
        config.suggestion_pool = config
            .suggestion_pool
            .map(|p| Self::expand_path(&p).unwrap_or(p));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// The config file if present, defaults otherwise.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/chatmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Chips from `suggestion_pool`, or the built-in pool when none is
    /// configured or the file can't be used.
    pub fn chip_pool(&self) -> Vec<Chip> {
        let Some(path) = &self.suggestion_pool else {
            return chatmark_engine::default_pool();
        };
        match Self::read_pool(path) {
            Ok(chips) if !chips.is_empty() => chips,
            Ok(_) => {
                log::warn!("Suggestion pool {} is empty, using defaults", path.display());
                chatmark_engine::default_pool()
            }
            Err(e) => {
                log::warn!("Failed to load suggestion pool: {e:#}");
                chatmark_engine::default_pool()
            }
        }
    }

    /// Stored history capped at `max_messages`; corrupt input starts empty.
    pub fn restore_session(&self, json: &str) -> ChatSession {
        ChatSession::restore(json, self.max_messages)
    }

    fn read_pool(path: &Path) -> anyhow::Result<Vec<Chip>> {
        let content = std::fs::read_to_string(path)?;
        let pool: PoolFile = toml::from_str(&content)?;
        Ok(pool.chips)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
