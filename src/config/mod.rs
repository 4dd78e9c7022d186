//! config
//!
//! Configuration loading and persistence.
//!
//! # Locations
//!
//! The configuration file is searched in this order:
//! 1. `$COMET_CONFIG` if set (used as-is, whether or not it exists yet,
//!    so `init` can create the file it names)
//! 2. `<platform config dir>/comet/config.toml` (e.g.
//!    `~/.config/comet/config.toml` on Linux)
//!
//! # Errors
//!
//! Unlike optional tool configuration, a missing file here is an error:
//! `generate` cannot run without provider credentials, and the error
//! message points the user at `comet init`.

pub mod schema;

pub use schema::{default_config, Config, LanguageConfig, ProviderConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Name of the environment variable overriding the config path.
pub const CONFIG_ENV: &str = "COMET_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at '{path}' (run `comet init` to create it)")]
    NotFound { path: PathBuf },

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("config directory not found")]
    NoConfigDir,
}

/// Resolve the configuration file path.
///
/// `$COMET_CONFIG` wins unconditionally; otherwise the platform config
/// directory is used.
pub fn default_path() -> Result<PathBuf, ConfigError> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join("comet/config.toml"))
}

impl Config {
    /// Load and validate configuration from `path`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NotFound`] if the file does not exist
    /// - [`ConfigError::ParseError`] if it is not valid TOML for the schema
    /// - [`ConfigError::InvalidValue`] if validation fails
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Write the configuration to `path` atomically.
    ///
    /// Creates parent directories if needed. Uses atomic write (write to
    /// temp file, then rename) to prevent corruption.
    pub fn write(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }
}
