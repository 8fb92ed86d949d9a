//! CLI configuration

use std::path::PathBuf;

use anyhow::Context;
use rfcview_core::RankDir;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "RFCVIEW_CONFIG";

/// Index file used when neither `--index` nor the config names one
pub const DEFAULT_INDEX_FILE: &str = "rfc-index.txt";

/// Get default config directory
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rfcview")
}

/// Path of the config file, honouring `RFCVIEW_CONFIG`
pub fn config_file_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| default_config_dir().join("config.toml"))
}

/// Configuration for the CLI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Index file read when `--index` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_path: Option<PathBuf>,

    /// Layout direction used when `--rankdir` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rankdir: Option<RankDir>,
}

impl Config {
    /// Load the config file, falling back to defaults if it is missing or invalid
    pub fn load() -> Self {
        let path = config_file_path();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => {
                tracing::debug!("No config file at {:?}, using defaults", path);
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_file_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["index_path", "rankdir"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "index_path" => self.index_path.as_ref().map(|p| p.display().to_string()),
            "rankdir" => self.rankdir.map(|r| r.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "index_path" => self.index_path = Some(PathBuf::from(value)),
            "rankdir" => {
                self.rankdir = Some(value.parse().map_err(anyhow::Error::msg)?);
            }
            _ => anyhow::bail!(
                "Unknown config key: {} (available: {})",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }

    /// Index file to read: explicit flag, then config, then the working directory
    pub fn resolve_index_path(&self, flag: Option<&PathBuf>) -> PathBuf {
        flag.cloned()
            .or_else(|| self.index_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_FILE))
    }
}
