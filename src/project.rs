//! Row Projector
//!
//! Flattens one record into display strings for the selected columns. The
//! projection is the same for every render mode.

use crate::record::{lookup_in, DomainRecord};
use crate::registry::{ColumnSpec, DisplayRule, EntityDef, ValueKind};
use crate::types::ColumnName;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Display value for a structurally absent field.
pub const SENTINEL: &str = "-";

/// One record's display strings, keyed by column, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectedRow {
    cells: Vec<(ColumnName, String)>,
}

impl ProjectedRow {
    pub fn get(&self, column: &ColumnName) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn cells(&self) -> &[(ColumnName, String)] {
        &self.cells
    }

    /// Values in display order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(ColumnName, String)> for ProjectedRow {
    fn from_iter<I: IntoIterator<Item = (ColumnName, String)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Serialize for ProjectedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name.as_str(), value)?;
        }
        map.end()
    }
}

/// Project `record` onto `columns`. Absent values become [`SENTINEL`]; present
/// zeros and empty strings are kept as `"0"` and `""`.
pub fn project(entity: &EntityDef, record: &DomainRecord, columns: &[ColumnName]) -> ProjectedRow {
    columns
        .iter()
        .map(|name| {
            let value = entity
                .column(name)
                .and_then(|spec| record.lookup(&spec.path).map(|v| display_value(spec, v)))
                .unwrap_or_else(|| SENTINEL.to_string());
            (name.clone(), value)
        })
        .collect()
}

/// Project every record, preserving order.
pub fn project_all(
    entity: &EntityDef,
    records: &[DomainRecord],
    columns: &[ColumnName],
) -> Vec<ProjectedRow> {
    records
        .iter()
        .map(|record| project(entity, record, columns))
        .collect()
}

/// Display string for a present value of a registered column.
pub fn display_value(spec: &ColumnSpec, value: &Value) -> String {
    if let DisplayRule::JoinNames(sub_path) = spec.display {
        return join_names(value, sub_path);
    }
    let shown = match spec.kind {
        ValueKind::Timestamp => format_timestamp(value),
        ValueKind::Count => match value {
            Value::Array(items) => items.len().to_string(),
            other => scalar_text(other),
        },
        ValueKind::Integer => integer_text(value),
        ValueKind::Text => scalar_text(value),
    };
    match spec.display {
        DisplayRule::Lowercase => shown.to_lowercase(),
        _ => shown,
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .filter(|v| !v.is_null())
            .map(scalar_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Null => SENTINEL.to_string(),
        other => other.to_string(),
    }
}

/// Integral floats (`20.0`) display as integers.
fn integer_text(value: &Value) -> String {
    match value {
        Value::Number(n) if !n.is_i64() && !n.is_u64() => match n.as_f64() {
            Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e18 => {
                (f as i64).to_string()
            }
            _ => n.to_string(),
        },
        other => scalar_text(other),
    }
}

fn format_timestamp(value: &Value) -> String {
    match value {
        Value::String(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|ts| {
                ts.with_timezone(&Utc)
                    .to_rfc3339_opts(SecondsFormat::Secs, true)
            })
            .unwrap_or_else(|_| raw.clone()),
        other => scalar_text(other),
    }
}

fn join_names(value: &Value, sub_path: &str) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| lookup_in(item, sub_path.split('.')))
            .map(scalar_text)
            .collect::<Vec<_>>()
            .join(","),
        other => scalar_text(other),
    }
}
