//! Config loading facade: defaults, then a config file, then the environment.

use super::merge::builder_with_defaults;
use super::sources::{environment, global_file};
use super::SltableConfig;
use config::ConfigError;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration. An explicit `path` replaces the global file.
    pub fn load(explicit: Option<&Path>) -> Result<SltableConfig, ConfigError> {
        let mut builder = builder_with_defaults()?;
        builder = match explicit {
            Some(path) => global_file::add_explicit_to_builder(builder, path)?,
            None => global_file::add_to_builder(builder)?,
        };
        builder = environment::add_to_builder(builder)?;
        let config: SltableConfig = builder.build()?.try_deserialize()?;
        debug!(
            explicit = ?explicit,
            entities = config.entities.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load a single file over the defaults, ignoring the global file and environment.
    pub fn load_from_file(path: &Path) -> Result<SltableConfig, ConfigError> {
        let builder = global_file::add_explicit_to_builder(builder_with_defaults()?, path)?;
        builder.build()?.try_deserialize()
    }

    pub fn xdg_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    /// Built-in defaults only.
    pub fn default() -> SltableConfig {
        SltableConfig::default()
    }
}
