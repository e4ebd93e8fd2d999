//! Configuration System
//!
//! Layered configuration: built-in defaults, the global (or an explicit) TOML
//! file, then `SLTABLE__*` environment variables. Covers output defaults,
//! logging, and per-entity column overrides.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::registry::{EntityOverride, Registry};
use crate::render::TableStyle;
use crate::types::{EntityKind, RenderMode};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

mod facade;
mod merge;
pub mod paths;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SltableConfig {
    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Per-entity overrides, keyed by entity kind name
    #[serde(default)]
    pub entities: BTreeMap<String, EntityOverride>,
}

/// Output defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Render mode when `--output` is not given
    #[serde(default)]
    pub default_mode: RenderMode,

    /// Table border preset
    #[serde(default)]
    pub table_style: TableStyle,

    /// Colored error output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_mode: RenderMode::default(),
            table_style: TableStyle::default(),
            color: true,
        }
    }
}

impl SltableConfig {
    /// Entity overrides keyed by kind. Unknown kind names are rejected.
    pub fn entity_overrides(&self) -> Result<HashMap<EntityKind, EntityOverride>, ApiError> {
        self.entities
            .iter()
            .map(|(name, over)| {
                let kind = name.parse::<EntityKind>().map_err(|_| {
                    ApiError::ConfigError(format!("Unknown entity kind in [entities]: '{}'", name))
                })?;
                Ok((kind, over.clone()))
            })
            .collect()
    }

    /// Build the registry with this configuration's overrides applied.
    pub fn build_registry(&self) -> Result<Registry, ApiError> {
        let overrides = self.entity_overrides()?;
        Registry::with_overrides(&overrides)
            .map_err(|e| ApiError::ConfigError(format!("Invalid entity override: {}", e)))
    }

    /// Effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApiError> {
        toml::to_string_pretty(self)
            .map_err(|e| ApiError::ConfigError(format!("Failed to serialize config: {}", e)))
    }
}
