//! Field mask resolution.
//!
//! Turns a validated [`Selection`] into the minimal set of remote field paths
//! the record source must return: every displayed column plus the sort column.

use crate::record::RemoteFieldPath;
use crate::registry::EntityDef;
use crate::select::Selection;
use crate::types::ColumnName;
use serde::Serialize;
use std::fmt;

/// Ordered, de-duplicated remote field paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldMask {
    paths: Vec<RemoteFieldPath>,
}

impl FieldMask {
    /// Mask for a selection: display columns in order, then the sort column if not shown.
    pub fn for_selection(entity: &EntityDef, selection: &Selection) -> Self {
        let mut builder = FieldMaskBuilder::new(entity);
        for column in selection.columns() {
            builder.column(column);
        }
        if let Some(key) = selection.sort_key().column() {
            builder.column(key);
        }
        builder.build()
    }

    pub fn paths(&self) -> &[RemoteFieldPath] {
        &self.paths
    }

    pub fn contains(&self, path: &RemoteFieldPath) -> bool {
        self.paths.contains(path)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl fmt::Display for FieldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, path) in self.paths.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", path)?;
        }
        Ok(())
    }
}

/// Builds a mask from registered column names only; paths come from the registry.
pub struct FieldMaskBuilder<'a> {
    entity: &'a EntityDef,
    paths: Vec<RemoteFieldPath>,
}

impl<'a> FieldMaskBuilder<'a> {
    pub fn new(entity: &'a EntityDef) -> Self {
        Self {
            entity,
            paths: Vec::new(),
        }
    }

    /// Add a column's path. Returns false if the column is not registered.
    pub fn column(&mut self, name: &ColumnName) -> bool {
        match self.entity.column(name) {
            Some(spec) => {
                if !self.paths.contains(&spec.path) {
                    self.paths.push(spec.path.clone());
                }
                true
            }
            None => {
                tracing::warn!(
                    entity = %self.entity.kind(),
                    column = %name,
                    "Column has no registered field path; left out of mask"
                );
                false
            }
        }
    }

    pub fn build(self) -> FieldMask {
        FieldMask { paths: self.paths }
    }
}
