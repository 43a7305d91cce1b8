//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from config file.
///
/// Replaces ambient global state: the resolved paths are computed once at
/// startup and handed to the data layer explicitly.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Database file path
    pub database: Option<PathBuf>,

    /// Metadata (category vocabulary) file path
    pub metadata: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/shelf/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shelf")
            .join("config.toml")
    }

    /// Resolve the database path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--database` argument
    /// 2. Config file `database` setting
    /// 3. `shelf.sqlite` in the working directory
    pub fn database_path(&self, cli_db: Option<&PathBuf>) -> PathBuf {
        cli_db
            .cloned()
            .or_else(|| self.database.clone())
            .unwrap_or_else(|| PathBuf::from("shelf.sqlite"))
    }

    /// Resolve the metadata path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--metadata` argument
    /// 2. Config file `metadata` setting
    /// 3. `shelf.json` in the working directory
    pub fn metadata_path(&self, cli_meta: Option<&PathBuf>) -> PathBuf {
        cli_meta
            .cloned()
            .or_else(|| self.metadata.clone())
            .unwrap_or_else(|| PathBuf::from("shelf.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_paths() {
        let config = Config::default();
        assert!(config.database.is_none());
        assert!(config.metadata.is_none());
    }

    #[test]
    fn database_path_prefers_cli_arg() {
        let config = Config {
            database: Some(PathBuf::from("/config/db.sqlite")),
            metadata: None,
        };
        let cli = PathBuf::from("/cli/db.sqlite");
        assert_eq!(
            config.database_path(Some(&cli)),
            PathBuf::from("/cli/db.sqlite")
        );
    }

    #[test]
    fn database_path_falls_back_to_config() {
        let config = Config {
            database: Some(PathBuf::from("/config/db.sqlite")),
            metadata: None,
        };
        assert_eq!(
            config.database_path(None),
            PathBuf::from("/config/db.sqlite")
        );
    }

    #[test]
    fn paths_fall_back_to_working_directory_defaults() {
        let config = Config::default();
        assert_eq!(config.database_path(None), PathBuf::from("shelf.sqlite"));
        assert_eq!(config.metadata_path(None), PathBuf::from("shelf.json"));
    }

    #[test]
    fn config_path_is_in_config_dir() {
        let path = Config::config_path();
        assert!(path.ends_with("shelf/config.toml"));
    }
}
