//! Configuration management for Uranai CLI
//!
//! Stores the ranking API location, default language and data directory in
//! ~/.config/uranai/config.toml. `URANAI_*` environment variables win over
//! the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

const CONFIG_DIR: &str = "uranai";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_lang() -> String {
    "ja".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            lang: default_lang(),
            data_dir: default_data_dir(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file (or defaults), then apply environment overrides
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let mut config = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            Self::parse(&content)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(base_url) = var("URANAI_BASE_URL") {
            self.base_url = base_url;
        }
        if let Some(lang) = var("URANAI_LANG") {
            self.lang = lang;
        }
        if let Some(data_dir) = var("URANAI_DATA_DIR") {
            self.data_dir = PathBuf::from(data_dir);
        }
        if let Some(raw) = var("URANAI_TIMEOUT_SECS") {
            match raw.parse() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => warn!(value = %raw, "Ignoring invalid URANAI_TIMEOUT_SECS"),
            }
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn prompts_dir(&self) -> PathBuf {
        self.data_dir.join("prompts")
    }

    pub fn results_dir(&self) -> PathBuf {
        self.data_dir.join("results")
    }
}
