//! TOML-based application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Application configuration, stored as `config.toml` in the data
/// directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
}

/// Where snapshot data lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Overrides the default `<data_dir>/snapshot.json` location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,
}

impl Config {
    /// Location of the configuration file.
    pub fn file_path() -> Result<PathBuf> {
        Ok(super::data_dir()?.join("config.toml"))
    }

    /// Load from disk, or write and return the default.
    pub fn load() -> Result<Self> {
        let path = Self::file_path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path,
                    message: e.to_string(),
                })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::file_path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Load from disk, returning the default on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data.snapshot_path" => self
                .data
                .snapshot_path
                .as_ref()
                .map(|p| p.display().to_string()),
            _ => None,
        }
    }

    /// Set a config value by key and persist. Unknown keys are an error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data.snapshot_path" => {
                self.data.snapshot_path = Some(PathBuf::from(value));
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string()).into()),
        }
        self.save()
    }

    /// Resolved snapshot location: the configured override or the default
    /// file in the data directory.
    pub fn snapshot_path(&self) -> Result<PathBuf> {
        match &self.data.snapshot_path {
            Some(path) => Ok(path.clone()),
            None => Ok(super::data_dir()?.join("snapshot.json")),
        }
    }
}
