//! Configuration management for the kuku CLI.
//!
//! Settings are layered, later sources winning:
//! 1. Default values
//! 2. Config file (`~/.kuku/config.toml`, or `--config`)
//! 3. A `.env` file in the working directory
//! 4. Environment variables

mod schema;

pub use schema::{AppConfig, IssueLevel};

use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    /// Missing required field.
    #[error("missing required config: {0}")]
    MissingField(String),
    /// Invalid value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Get the default config directory path.
#[must_use]
pub fn default_config_dir() -> PathBuf {
    dirs_next::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".kuku")
}

/// Get the default config file path.
#[must_use]
pub fn config_path() -> PathBuf {
    default_config_dir().join("config.toml")
}

/// Load configuration from a specific path.
///
/// A missing file yields the defaults.
pub async fn load_config_from(path: &Path) -> ConfigResult<AppConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: AppConfig = toml::from_str(&content)?;
    debug!(path = %path.display(), "loaded config file");

    Ok(config)
}

/// Load the file at `path`, then apply `.env` and the process environment.
pub async fn load_layered(path: &Path) -> ConfigResult<AppConfig> {
    if let Ok(env_file) = dotenv::dotenv() {
        debug!(path = %env_file.display(), "loaded .env");
    }

    Ok(load_config_from(path).await?.with_env())
}

/// Save configuration to a specific path.
pub async fn save_config_to(config: &AppConfig, path: &Path) -> ConfigResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    let content = toml::to_string_pretty(config)?;
    tokio::fs::write(path, content).await?;
    info!(path = %path.display(), "saved config file");

    Ok(())
}

/// Write a default config file at `path` unless one exists (or `force`).
///
/// Returns whether a file was written.
pub async fn init_config_at(path: &Path, force: bool) -> ConfigResult<bool> {
    if path.exists() && !force {
        return Ok(false);
    }

    save_config_to(&AppConfig::default(), path).await?;
    Ok(true)
}
