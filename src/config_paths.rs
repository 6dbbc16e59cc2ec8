//! Centralized configuration paths for fastfm
//!
//! All config files live under the platform application-data directory:
//! - Windows: `%APPDATA%\FastFileManage\`
//! - macOS: `~/Library/Application Support/FastFileManage/`
//! - elsewhere: `$XDG_CONFIG_HOME/FastFileManage/` or `~/.config/FastFileManage/`
//!
//! This module is the single source of truth for config paths.

use std::{
    fs,
    path::{Path, PathBuf},
};

pub const APP_DIR: &str = "FastFileManage";

/// Name of the persisted keyboard/ui configuration file
pub const CONFIG_FILE_NAME: &str = "key-config.json";

/// Prefix of the daily-rotated log files
pub const LOG_FILE_PREFIX: &str = "fastfm.log";

/// Base config directory for fastfm
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .or_else(dirs::config_dir)
            .map(|appdata| appdata.join(APP_DIR))
    }

    #[cfg(target_os = "macos")]
    {
        dirs::home_dir().map(|h| h.join("Library").join("Application Support").join(APP_DIR))
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `<config dir>/key-config.json`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// `<config dir>/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let config = ensure_config_dir()?;
    let logs = config.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}
