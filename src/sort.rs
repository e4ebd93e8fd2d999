//! Sort Dispatcher
//!
//! One comparator table for every (entity kind, sortable column) pair, built
//! from the registry at startup. Sorting is ascending and stable.

use crate::record::{DomainRecord, RemoteFieldPath};
use crate::registry::{Registry, ValueKind};
use crate::types::{ColumnName, EntityKind, SortKey};
use serde_json::Value;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Compares two looked-up values; `None` is an absent value.
pub type Comparator = fn(Option<&Value>, Option<&Value>) -> Ordering;

/// Comparator for a declared value kind.
pub fn comparator_for(kind: ValueKind) -> Comparator {
    match kind {
        ValueKind::Integer => compare_integer,
        ValueKind::Text | ValueKind::Timestamp => compare_text,
        ValueKind::Count => compare_count,
    }
}

/// Ordering key for numeric columns: absent first, then numbers, then
/// anything that is present but not numeric, lexicographically.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum NumericKey<'a> {
    Absent,
    Number(Number),
    Other(Cow<'a, str>),
}

/// A JSON number. Integers compare exactly; a float on either side compares
/// both as `f64`.
#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    fn from_json(n: &serde_json::Number) -> Option<Self> {
        n.as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
            .map(Number::Int)
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(Number::Float))
    }

    fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        s.parse::<i128>().ok().map(Number::Int).or_else(|| {
            s.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Number::Float)
        })
    }

    fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(b),
            _ => self.as_f64().total_cmp(&other.as_f64()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

fn integer_key(value: Option<&Value>) -> NumericKey<'_> {
    match value {
        None => NumericKey::Absent,
        Some(Value::Number(n)) => Number::from_json(n)
            .map(NumericKey::Number)
            .unwrap_or_else(|| NumericKey::Other(Cow::Owned(n.to_string()))),
        Some(Value::String(s)) => match Number::parse(s) {
            Some(n) => NumericKey::Number(n),
            None => NumericKey::Other(Cow::Borrowed(s.as_str())),
        },
        Some(other) => NumericKey::Other(Cow::Owned(other.to_string())),
    }
}

fn text_key(value: Option<&Value>) -> Option<Cow<'_, str>> {
    value.map(|v| match v {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    })
}

fn count_key(value: Option<&Value>) -> NumericKey<'_> {
    match value {
        Some(Value::Array(items)) => NumericKey::Number(Number::Int(items.len() as i128)),
        other => integer_key(other),
    }
}

fn compare_integer(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    integer_key(a).cmp(&integer_key(b))
}

fn compare_text(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    text_key(a).cmp(&text_key(b))
}

fn compare_count(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    count_key(a).cmp(&count_key(b))
}

#[derive(Clone)]
struct SortEntry {
    path: RemoteFieldPath,
    compare: Comparator,
}

/// Dispatch table from (entity kind, column) to the column's comparator.
#[derive(Clone)]
pub struct SortDispatcher {
    table: HashMap<(EntityKind, ColumnName), SortEntry>,
}

impl std::fmt::Debug for SortDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortDispatcher")
            .field("entries", &self.table.len())
            .finish()
    }
}

impl SortDispatcher {
    pub fn new(registry: &Registry) -> Self {
        let mut table = HashMap::new();
        for entity in registry.entities() {
            for name in entity.sortable_columns() {
                if let Some(spec) = entity.column(name) {
                    table.insert(
                        (entity.kind(), name.clone()),
                        SortEntry {
                            path: spec.path.clone(),
                            compare: comparator_for(spec.kind),
                        },
                    );
                }
            }
        }
        Self { table }
    }

    /// Order `records` by `sort_key`, ascending and stable. An empty key keeps
    /// the input order.
    pub fn sort(
        &self,
        kind: EntityKind,
        sort_key: &SortKey,
        mut records: Vec<DomainRecord>,
    ) -> Vec<DomainRecord> {
        let Some(column) = sort_key.column() else {
            return records;
        };
        let Some(entry) = self.table.get(&(kind, column.clone())) else {
            warn!(entity = %kind, sort_key = %column, "No comparator registered; order left unchanged");
            return records;
        };
        debug!(entity = %kind, sort_key = %column, count = records.len(), "Sorting records");
        records.sort_by(|a, b| (entry.compare)(a.lookup(&entry.path), b.lookup(&entry.path)));
        records
    }

    pub fn supports(&self, kind: EntityKind, column: &ColumnName) -> bool {
        self.table.contains_key(&(kind, column.clone()))
    }
}
