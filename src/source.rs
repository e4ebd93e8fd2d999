//! Record sources: the seam between the listing pipeline and whatever
//! produces domain records.

use crate::error::SourceError;
use crate::mask::FieldMask;
use crate::record::{lookup_in, DomainRecord, RemoteFieldPath};
use crate::types::EntityKind;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fetches the records of one entity kind, restricted to the masked fields.
pub trait RecordSource {
    fn fetch(&self, kind: EntityKind, mask: &FieldMask) -> Result<Vec<DomainRecord>, SourceError>;
}

/// Records held in memory, keyed by entity kind.
///
/// Fetching prunes each record down to the masked paths, so a column whose
/// path is missing from the mask projects as absent.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: HashMap<EntityKind, Vec<DomainRecord>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(mut self, kind: EntityKind, records: Vec<DomainRecord>) -> Self {
        self.records.entry(kind).or_default().extend(records);
        self
    }

    pub fn len(&self, kind: EntityKind) -> usize {
        self.records.get(&kind).map_or(0, Vec::len)
    }
}

impl RecordSource for InMemorySource {
    fn fetch(&self, kind: EntityKind, mask: &FieldMask) -> Result<Vec<DomainRecord>, SourceError> {
        let records = self
            .records
            .get(&kind)
            .map(|all| all.iter().map(|r| prune(r, mask)).collect())
            .unwrap_or_default();
        Ok(records)
    }
}

/// Copy only the masked paths of `record` into a fresh record.
pub fn prune(record: &DomainRecord, mask: &FieldMask) -> DomainRecord {
    let mut out = Value::Object(Map::new());
    for path in mask.paths() {
        if let Some(value) = lookup_in(record.as_value(), path.segments()) {
            insert_at(&mut out, path, value.clone());
        }
    }
    DomainRecord::new(out)
}

fn insert_at(root: &mut Value, path: &RemoteFieldPath, value: Value) {
    let segments: Vec<&str> = path.segments().collect();
    let Some((last, parents)) = segments.split_last() else {
        return;
    };
    let mut current = root;
    for segment in parents {
        let Value::Object(map) = current else {
            return;
        };
        current = map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    if let Value::Object(map) = current {
        map.insert(last.to_string(), value);
    }
}

/// Reads a JSON array of records from a file, or from stdin when the path is `-`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }

    fn read_text(&self) -> Result<String, SourceError> {
        if self.is_stdin() {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        } else {
            Ok(std::fs::read_to_string(&self.path)?)
        }
    }

    /// Parse a JSON document into records. The document must be an array.
    pub fn parse_records(text: &str) -> Result<Vec<DomainRecord>, SourceError> {
        match serde_json::from_str::<Value>(text)? {
            Value::Array(items) => Ok(items.into_iter().map(DomainRecord::new).collect()),
            other => Err(SourceError::NotAList(json_type_name(&other).to_string())),
        }
    }
}

impl RecordSource for JsonFileSource {
    fn fetch(&self, kind: EntityKind, mask: &FieldMask) -> Result<Vec<DomainRecord>, SourceError> {
        let text = self.read_text()?;
        let records = Self::parse_records(&text)?;
        debug!(
            entity = %kind,
            path = %self.path.display(),
            count = records.len(),
            "Loaded records"
        );
        InMemorySource::new()
            .with_records(kind, records)
            .fetch(kind, mask)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
