//! Column Selector
//!
//! Validates a caller's requested columns and sort key against an entity's
//! registration and resolves the final, ordered column list.

use crate::error::ProjectionError;
use crate::registry::EntityDef;
use crate::types::{ColumnName, EntityKind, SortKey};
use std::collections::HashSet;

/// Validated display columns and sort key for one invocation.
///
/// Only [`select`] constructs a `Selection`, so holding one proves both
/// validations passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    entity: EntityKind,
    columns: Vec<ColumnName>,
    sort_key: SortKey,
}

impl Selection {
    pub fn entity(&self) -> EntityKind {
        self.entity
    }

    /// Final display columns, in display order.
    pub fn columns(&self) -> &[ColumnName] {
        &self.columns
    }

    pub fn sort_key(&self) -> &SortKey {
        &self.sort_key
    }
}

/// Resolve the display columns for a request.
///
/// Empty `requested` yields the entity's default columns in registration
/// order; otherwise the caller's columns are returned in the caller's order,
/// with repeats (`id,ID`) dropped after their first occurrence.
/// Columns are validated before the sort key, and the first failure wins.
pub fn select(
    entity: &EntityDef,
    sort_key: &SortKey,
    requested: &[ColumnName],
) -> Result<Selection, ProjectionError> {
    if let Some(bad) = requested.iter().find(|c| !entity.is_displayable(c)) {
        return Err(ProjectionError::UnsupportedColumn(bad.to_string()));
    }

    if let Some(key) = sort_key.column() {
        if !entity.is_sortable(key) {
            return Err(ProjectionError::UnsupportedSortKey(key.to_string()));
        }
    }

    let columns = if requested.is_empty() {
        entity.default_columns().to_vec()
    } else {
        let mut seen = HashSet::new();
        requested
            .iter()
            .filter(|c| seen.insert(*c))
            .cloned()
            .collect()
    };

    Ok(Selection {
        entity: entity.kind(),
        columns,
        sort_key: sort_key.clone(),
    })
}
