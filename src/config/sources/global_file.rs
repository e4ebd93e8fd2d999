//! Global config file source: $XDG_CONFIG_HOME/sltable/config.toml or ~/.config/sltable/config.toml

use crate::config::paths;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    paths::global_config_file().ok()
}

/// Add global config file source to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let Some(path) = global_config_path() else {
        return Ok(builder);
    };
    if path.exists() {
        let canonical = path.canonicalize().unwrap_or(path);
        Ok(builder.add_source(File::from(canonical).required(false)))
    } else {
        warn!(
            config_path = %path.display(),
            "Default configuration file not found. \
             Consider creating it for user-level defaults."
        );
        Ok(builder)
    }
}

/// Add an explicitly requested config file. Unlike the global file it must exist.
pub fn add_explicit_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }
    Ok(builder.add_source(File::from(path.to_path_buf()).required(true)))
}
