//! Field Registry
//!
//! Static, per-entity-kind column registration: which columns exist, where each
//! one lives in the remote record, how it is typed and labelled, and which of
//! them are shown by default, shown on request, or usable as sort keys.
//!
//! The registry is built once at startup (builtin catalogue plus any configured
//! overrides), validated, and read-only afterwards.

mod catalogue;

use crate::error::RegistryError;
use crate::record::RemoteFieldPath;
use crate::types::{ColumnName, EntityKind, SortKey};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub use catalogue::builtin_decl;

/// Declared value type of a column. Selects the comparator and the display format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Integer,
    Text,
    Timestamp,
    Count,
}

/// Per-column display transform applied after the value kind's formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRule {
    Raw,
    Lowercase,
    /// List of objects rendered as the comma-joined value at this sub-path of each element.
    JoinNames(&'static str),
}

/// Static declaration of one column.
#[derive(Debug, Clone, Copy)]
pub struct ColumnDecl {
    pub name: &'static str,
    pub path: &'static str,
    pub kind: ValueKind,
    pub label: &'static str,
    pub display: DisplayRule,
}

impl ColumnDecl {
    pub const fn new(
        name: &'static str,
        path: &'static str,
        kind: ValueKind,
        label: &'static str,
    ) -> Self {
        Self {
            name,
            path,
            kind,
            label,
            display: DisplayRule::Raw,
        }
    }

    pub const fn display(mut self, display: DisplayRule) -> Self {
        self.display = display;
        self
    }
}

/// Static declaration of one entity kind.
#[derive(Debug, Clone, Copy)]
pub struct EntityDecl {
    pub kind: EntityKind,
    pub columns: &'static [ColumnDecl],
    pub defaults: &'static [&'static str],
    pub optional: &'static [&'static str],
    pub sortable: &'static [&'static str],
    pub default_sort: Option<&'static str>,
}

/// A validated, registered column.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub name: ColumnName,
    pub path: RemoteFieldPath,
    pub kind: ValueKind,
    pub label: String,
    pub display: DisplayRule,
}

/// Configured replacement of an entity's default columns or default sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_columns: Option<Vec<ColumnName>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<String>,
}

/// Registered columns of one entity kind.
#[derive(Debug, Clone)]
pub struct EntityDef {
    kind: EntityKind,
    columns: Vec<ColumnSpec>,
    index: HashMap<ColumnName, usize>,
    defaults: Vec<ColumnName>,
    optional: Vec<ColumnName>,
    sortable: Vec<ColumnName>,
    default_sort: SortKey,
}

impl EntityDef {
    /// Validate a declaration and build the runtime definition.
    pub fn build(decl: &EntityDecl) -> Result<Self, RegistryError> {
        let entity = decl.kind;
        let mut columns = Vec::with_capacity(decl.columns.len());
        let mut index = HashMap::new();

        for c in decl.columns {
            let name = ColumnName::new(c.name);
            let path = RemoteFieldPath::parse(c.path).ok_or_else(|| RegistryError::InvalidPath {
                entity,
                column: c.name.to_string(),
                path: c.path.to_string(),
            })?;
            if index.insert(name.clone(), columns.len()).is_some() {
                return Err(RegistryError::DuplicateColumn {
                    entity,
                    column: c.name.to_string(),
                });
            }
            columns.push(ColumnSpec {
                name,
                path,
                kind: c.kind,
                label: c.label.to_string(),
                display: c.display,
            });
        }

        let resolve = |list: &'static str, names: &[&str]| -> Result<Vec<ColumnName>, RegistryError> {
            names
                .iter()
                .map(|n| {
                    let name = ColumnName::new(*n);
                    if index.contains_key(&name) {
                        Ok(name)
                    } else {
                        Err(RegistryError::UnknownColumn {
                            entity,
                            list,
                            column: n.to_string(),
                        })
                    }
                })
                .collect()
        };

        let defaults = resolve("default", decl.defaults)?;
        let optional = resolve("optional", decl.optional)?;
        let sortable = resolve("sortable", decl.sortable)?;

        if defaults.is_empty() {
            return Err(RegistryError::NoDefaultColumns { entity });
        }
        if let Some(both) = optional.iter().find(|c| defaults.contains(c)) {
            return Err(RegistryError::OverlappingColumn {
                entity,
                column: both.to_string(),
            });
        }

        let mut def = Self {
            kind: entity,
            columns,
            index,
            defaults,
            optional,
            sortable,
            default_sort: SortKey::none(),
        };
        if let Some(sort) = decl.default_sort {
            def.set_default_sort(SortKey::from(sort))?;
        }
        Ok(def)
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// All registered columns, in registration order.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn column(&self, name: &ColumnName) -> Option<&ColumnSpec> {
        self.index.get(name).map(|&i| &self.columns[i])
    }

    pub fn default_columns(&self) -> &[ColumnName] {
        &self.defaults
    }

    pub fn optional_columns(&self) -> &[ColumnName] {
        &self.optional
    }

    pub fn sortable_columns(&self) -> &[ColumnName] {
        &self.sortable
    }

    pub fn default_sort(&self) -> &SortKey {
        &self.default_sort
    }

    /// True when `name` may be displayed (default or optional).
    pub fn is_displayable(&self, name: &ColumnName) -> bool {
        self.defaults.contains(name) || self.optional.contains(name)
    }

    pub fn is_sortable(&self, name: &ColumnName) -> bool {
        self.sortable.contains(name)
    }

    /// Header label for a column, falling back to the raw name.
    pub fn label<'a>(&'a self, name: &'a ColumnName) -> &'a str {
        self.column(name)
            .map(|c| c.label.as_str())
            .unwrap_or(name.as_str())
    }

    /// Apply a configured override. The displayable set never changes: columns
    /// dropped from the default list become optional.
    pub fn apply_override(&mut self, over: &EntityOverride) -> Result<(), RegistryError> {
        if let Some(ref wanted) = over.default_columns {
            if wanted.is_empty() {
                return Err(RegistryError::NoDefaultColumns { entity: self.kind });
            }
            if let Some(bad) = wanted.iter().find(|c| !self.is_displayable(c)) {
                return Err(RegistryError::UnknownColumn {
                    entity: self.kind,
                    list: "override default",
                    column: bad.to_string(),
                });
            }
            let allowed: Vec<ColumnName> = self
                .defaults
                .iter()
                .chain(self.optional.iter())
                .cloned()
                .collect();
            let mut seen = HashSet::new();
            self.defaults = wanted
                .iter()
                .filter(|c| seen.insert((*c).clone()))
                .cloned()
                .collect();
            self.optional = allowed
                .into_iter()
                .filter(|c| !self.defaults.contains(c))
                .collect();
        }
        if let Some(ref sort) = over.default_sort {
            self.set_default_sort(SortKey::from(sort.as_str()))?;
        }
        Ok(())
    }

    fn set_default_sort(&mut self, sort: SortKey) -> Result<(), RegistryError> {
        if let Some(column) = sort.column() {
            if !self.is_sortable(column) {
                return Err(RegistryError::UnsortableDefault {
                    entity: self.kind,
                    column: column.to_string(),
                });
            }
        }
        self.default_sort = sort;
        Ok(())
    }
}

/// All entity kinds' registrations. Immutable once built.
#[derive(Debug, Clone)]
pub struct Registry {
    entities: Vec<EntityDef>,
}

impl Registry {
    /// Build the registry from the builtin catalogue.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::with_overrides(&HashMap::new())
    }

    /// Build the builtin registry and apply configured overrides keyed by entity kind.
    pub fn with_overrides(
        overrides: &HashMap<EntityKind, EntityOverride>,
    ) -> Result<Self, RegistryError> {
        let mut entities = Vec::with_capacity(EntityKind::ALL.len());
        for kind in EntityKind::ALL {
            let mut def = EntityDef::build(&builtin_decl(kind))?;
            if let Some(over) = overrides.get(&kind) {
                def.apply_override(over)?;
            }
            entities.push(def);
        }
        Ok(Self { entities })
    }

    /// Registration for `kind`. Every kind is registered at build time.
    pub fn entity(&self, kind: EntityKind) -> &EntityDef {
        &self.entities[kind.slot()]
    }

    pub fn entities(&self) -> impl Iterator<Item = &EntityDef> {
        self.entities.iter()
    }
}
