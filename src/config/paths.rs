//! XDG base directories for sltable's config and data files.

use crate::error::ApiError;
use directories::BaseDirs;
use std::path::PathBuf;

const APP_DIR: &str = "sltable";

fn from_env(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn home_dir() -> Result<PathBuf, ApiError> {
    from_env("HOME")
        .or_else(|| BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()))
        .ok_or_else(|| ApiError::ConfigError("Could not determine home directory".to_string()))
}

/// `$XDG_CONFIG_HOME`, falling back to `~/.config`.
pub fn config_home() -> Result<PathBuf, ApiError> {
    match from_env("XDG_CONFIG_HOME") {
        Some(dir) => Ok(dir),
        None => Ok(home_dir()?.join(".config")),
    }
}

/// `$XDG_DATA_HOME`, falling back to `~/.local/share`.
pub fn data_home() -> Result<PathBuf, ApiError> {
    match from_env("XDG_DATA_HOME") {
        Some(dir) => Ok(dir),
        None => Ok(home_dir()?.join(".local").join("share")),
    }
}

/// Global config file: `<config_home>/sltable/config.toml`.
pub fn global_config_file() -> Result<PathBuf, ApiError> {
    Ok(config_home()?.join(APP_DIR).join("config.toml"))
}

/// Default log file: `<data_home>/sltable/sltable.log`.
pub fn default_log_file() -> Result<PathBuf, ApiError> {
    Ok(data_home()?.join(APP_DIR).join("sltable.log"))
}
