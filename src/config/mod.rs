//! Configuration management for Trailhead

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Days shown in the activity series
    pub activity_window_days: usize,
    /// Override for where progress is stored (defaults to the platform data dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self { activity_window_days: 14, data_dir: None }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "trailhead")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let proj_dirs =
            ProjectDirs::from("", "", "trailhead").context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Get the progress file path
    pub fn progress_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("progress.json"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_shows_two_weeks_of_activity() {
        let config = Config::default();
        assert_eq!(config.activity_window_days, 14);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn data_dir_override_wins() {
        let config =
            Config { data_dir: Some(PathBuf::from("/tmp/trailhead-test")), ..Default::default() };
        assert_eq!(
            config.progress_path().unwrap(),
            PathBuf::from("/tmp/trailhead-test/progress.json")
        );
    }

    #[test]
    fn config_deserializes_without_optional_fields() {
        let config: Config = serde_json::from_str(r#"{"activity_window_days": 7}"#).unwrap();
        assert_eq!(config.activity_window_days, 7);
        assert!(config.data_dir.is_none());
    }
}
