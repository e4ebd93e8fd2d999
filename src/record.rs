//! Domain records and dotted field paths into them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A dotted path into the remote record schema, e.g. `serviceResource.datacenter.name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RemoteFieldPath(String);

impl RemoteFieldPath {
    /// Parse a dotted path. Segments must be non-empty ASCII alphanumerics or `_`.
    pub fn parse(path: &str) -> Option<Self> {
        if path.is_empty() {
            return None;
        }
        let well_formed = path.split('.').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
        });
        well_formed.then(|| RemoteFieldPath(path.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl fmt::Display for RemoteFieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque record handed over by the record source. Never mutated by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainRecord(Value);

impl DomainRecord {
    pub fn new(value: Value) -> Self {
        DomainRecord(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Value at `path`, or `None` when any segment is missing or null.
    pub fn lookup(&self, path: &RemoteFieldPath) -> Option<&Value> {
        lookup_in(&self.0, path.segments())
    }
}

impl From<Value> for DomainRecord {
    fn from(value: Value) -> Self {
        DomainRecord(value)
    }
}

pub(crate) fn lookup_in<'v, 's>(
    root: &'v Value,
    segments: impl IntoIterator<Item = &'s str>,
) -> Option<&'v Value> {
    let mut current = root;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
        if current.is_null() {
            return None;
        }
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}
