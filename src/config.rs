//! Configuration loading
//!
//! Reads an optional TOML file from the user's config directory
//! (`<config dir>/place-suggest/config.toml`) or from an explicit path.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod types;

pub use types::{ApiConfig, Config, SuggestConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Default config file location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("place-suggest").join("config.toml"))
}

/// Load configuration
///
/// An explicit path must exist. Without one, the default location is tried
/// and a missing file falls back to built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => load_from_path(path),
        None => match default_config_path() {
            Some(path) if path.exists() => load_from_path(&path),
            _ => Ok(Config::default()),
        },
    }
}

fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}
