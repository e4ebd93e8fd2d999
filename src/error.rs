//! Error types for the sltable projection pipeline.

use crate::types::EntityKind;
use thiserror::Error;

/// Request validation failures. Detected from registry data and caller input
/// only, before any record is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("--column {0} is not supported.")]
    UnsupportedColumn(String),

    #[error("--sortby {0} is not supported.")]
    UnsupportedSortKey(String),
}

/// Defects in column registration, reported when the registry is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{entity}: column '{column}' is registered twice")]
    DuplicateColumn { entity: EntityKind, column: String },

    #[error("{entity}: {list} list names unregistered column '{column}'")]
    UnknownColumn {
        entity: EntityKind,
        list: &'static str,
        column: String,
    },

    #[error("{entity}: column '{column}' is both a default and an optional column")]
    OverlappingColumn { entity: EntityKind, column: String },

    #[error("{entity}: default sort '{column}' is not sortable")]
    UnsortableDefault { entity: EntityKind, column: String },

    #[error("{entity}: no default columns")]
    NoDefaultColumns { entity: EntityKind },

    #[error("{entity}: column '{column}' has malformed field path '{path}'")]
    InvalidPath {
        entity: EntityKind,
        column: String,
        path: String,
    },
}

/// Failures in the record source collaborator.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read records: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse records: {0}")]
    Parse(String),

    #[error("Expected a JSON array of records, got {0}")]
    NotAList(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(err.to_string())
    }
}

/// Top-level error surfaced to the command layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Failed to list {entity} records: {source}")]
    Source {
        entity: EntityKind,
        #[source]
        source: SourceError,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid usage: {0}")]
    InvalidUsage(String),
}

impl ApiError {
    /// Process exit code for this error: usage problems exit 2, everything else 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::Projection(_) | ApiError::InvalidUsage(_) => 2,
            _ => 1,
        }
    }

    /// True when the failure came from the caller's input rather than the environment.
    pub fn is_usage(&self) -> bool {
        self.exit_code() == 2
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
