//! Application configuration persistence
//!
//! Stores key bindings and UI preferences in `key-config.json` under the
//! application config directory (see [`crate::config_paths`]).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fs::{ListOptions, SortBy, SortOrder};
use crate::keymap::{default_keyboard_config, KeyboardConfig};

pub const CONFIG_VERSION: &str = "1.0.0";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory available")]
    NoConfigDir,

    #[error("failed to read or write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// UI preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiConfig {
    pub theme: String,
    pub show_hidden_files: bool,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            show_hidden_files: false,
            sort_by: SortBy::Name,
            sort_order: SortOrder::Asc,
        }
    }
}

impl UiConfig {
    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            show_hidden: self.show_hidden_files,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
        }
    }
}

/// The persisted configuration record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: String,

    /// Raw chord strings; compiled into a `BindingTable` by the model
    #[serde(default = "default_keyboard_config")]
    pub keyboard: KeyboardConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

fn default_version() -> String {
    CONFIG_VERSION.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            keyboard: default_keyboard_config(),
            ui: UiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load config from the default location.
    ///
    /// Never fails: a missing or malformed file is replaced by the defaults.
    pub fn load() -> Self {
        match crate::config_paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config directory available, using defaults");
                Self::default()
            }
        }
    }

    /// Load config from `path`, writing the defaults back when the file is
    /// missing or cannot be parsed
    pub fn load_from(path: &Path) -> Self {
        match Self::read_from(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                return config;
            }
            Err(ConfigError::Io { source, .. }) if source.kind() != std::io::ErrorKind::NotFound => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), source);
                return Self::default();
            }
            Err(e) => {
                tracing::info!("{}, writing defaults", e);
            }
        }

        let config = Self::default();
        if let Err(e) = config.save_to(path) {
            tracing::warn!("Failed to write default config: {}", e);
        }
        config
    }

    /// Strict read: returns the parse error instead of falling back
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config as pretty-printed JSON, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Overwrite the file at `path` with defaults and return them
    pub fn reset(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }
}
