//! End-to-end listing: selection, mask, fetch, sort, projection and rendering.

use serde_json::{json, Value};
use sltable::error::SourceError;
use sltable::mask::FieldMask;
use sltable::record::DomainRecord;
use sltable::registry::Registry;
use sltable::render::{Renderer, TableStyle};
use sltable::sort::SortDispatcher;
use sltable::source::{InMemorySource, JsonFileSource, RecordSource};
use sltable::{ApiError, ColumnName, EntityKind, ListRequest, ListingService, ProjectionError, RenderMode, SortKey};
use std::cell::RefCell;
use tempfile::TempDir;

use super::test_utils::write_records;

/// Records every mask it was asked for.
struct RecordingSource {
    inner: InMemorySource,
    masks: RefCell<Vec<String>>,
}

impl RecordingSource {
    fn new(kind: EntityKind, records: Vec<Value>) -> Self {
        Self {
            inner: InMemorySource::new()
                .with_records(kind, records.into_iter().map(DomainRecord::new).collect()),
            masks: RefCell::new(Vec::new()),
        }
    }
}

impl RecordSource for RecordingSource {
    fn fetch(&self, kind: EntityKind, mask: &FieldMask) -> Result<Vec<DomainRecord>, SourceError> {
        self.masks.borrow_mut().push(mask.to_string());
        self.inner.fetch(kind, mask)
    }
}

fn run(request: &ListRequest, source: &dyn RecordSource) -> Result<String, ApiError> {
    let registry = Registry::builtin().unwrap();
    let sorter = SortDispatcher::new(&registry);
    ListingService::new(&registry, &sorter, Renderer::new(TableStyle::Plain)).run(request, source)
}

fn json_ids(output: &str) -> Vec<String> {
    let parsed: Value = serde_json::from_str(output).unwrap();
    parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_volume_default_listing_sorts_by_id() {
    let source = RecordingSource::new(
        EntityKind::Volume,
        vec![json!({"id": 123458}), json!({"id": 123457})],
    );
    let request = ListRequest::new(EntityKind::Volume)
        .with_sort_key(SortKey::by("id"))
        .with_mode(RenderMode::Json);
    let out = run(&request, &source).unwrap();
    assert_eq!(json_ids(&out), vec!["123457", "123458"]);
    assert_eq!(
        source.masks.borrow().as_slice(),
        &["id,username,serviceResource.datacenter.name,capacityGb".to_string()]
    );
}

#[test]
fn test_unsupported_column_makes_no_remote_call() {
    let source = RecordingSource::new(EntityKind::Volume, vec![json!({"id": 1})]);
    let err = run(
        &ListRequest::new(EntityKind::Volume).with_columns(["abc"]),
        &source,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Projection(ProjectionError::UnsupportedColumn(ref c)) if c == "abc"
    ));
    assert_eq!(err.exit_code(), 2);
    assert!(source.masks.borrow().is_empty());
}

#[test]
fn test_nil_datacenter_projects_sentinel() {
    let source = RecordingSource::new(
        EntityKind::Volume,
        vec![json!({"id": 1, "username": "u", "capacityGb": 0, "serviceResource": {"datacenter": null}})],
    );
    let out = run(
        &ListRequest::new(EntityKind::Volume).with_mode(RenderMode::Json),
        &source,
    )
    .unwrap();
    let parsed: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed[0]["datacenter"], "-");
    assert_eq!(parsed[0]["capacity_gb"], "0");
}

#[test]
fn test_table_and_json_show_same_values() {
    let records = vec![
        json!({"id": 1234, "username": "SL01SEV1", "capacityGb": 20,
               "serviceResource": {"datacenter": {"name": "dal10"}}}),
        json!({"id": 99, "username": "", "capacityGb": 0}),
    ];
    let table = run(
        &ListRequest::new(EntityKind::Volume).with_mode(RenderMode::Table),
        &RecordingSource::new(EntityKind::Volume, records.clone()),
    )
    .unwrap();
    let json_out = run(
        &ListRequest::new(EntityKind::Volume).with_mode(RenderMode::Json),
        &RecordingSource::new(EntityKind::Volume, records),
    )
    .unwrap();

    let parsed: Value = serde_json::from_str(&json_out).unwrap();
    let table_lines: Vec<&str> = table.lines().skip(1).collect();
    assert_eq!(table_lines.len(), 2);
    for (line, row) in table_lines.iter().zip(parsed.as_array().unwrap()) {
        let cells: Vec<&str> = line.split_whitespace().collect();
        for value in row.as_object().unwrap().values() {
            let value = value.as_str().unwrap();
            if !value.is_empty() {
                assert!(cells.contains(&value), "{} missing from {:?}", value, line);
            }
        }
    }
}

#[test]
fn test_caller_column_order_and_hidden_sort_column() {
    let source = RecordingSource::new(
        EntityKind::Volume,
        vec![
            json!({"id": 1, "capacityGb": 5, "fileNetworkMountAddress": "b:/vol"}),
            json!({"id": 2, "capacityGb": 7, "fileNetworkMountAddress": "a:/vol"}),
        ],
    );
    let request = ListRequest::new(EntityKind::Volume)
        .with_columns(["capacity_gb", "ID"])
        .with_sort_key(SortKey::by("mount_addr"))
        .with_mode(RenderMode::Json);
    let out = run(&request, &source).unwrap();
    assert_eq!(
        out,
        serde_json::to_string_pretty(&json!([
            {"capacity_gb": "7", "id": "2"},
            {"capacity_gb": "5", "id": "1"}
        ]))
        .unwrap()
    );
    assert_eq!(
        source.masks.borrow().as_slice(),
        &["capacityGb,id,fileNetworkMountAddress".to_string()]
    );
}

#[test]
fn test_every_entity_lists_defaults_from_empty_source() {
    for kind in EntityKind::ALL {
        let source = RecordingSource::new(kind, vec![]);
        let out = run(&ListRequest::new(kind).with_mode(RenderMode::Json), &source).unwrap();
        assert_eq!(out, "[]");
        assert_eq!(source.masks.borrow().len(), 1);
    }
}

#[test]
fn test_json_file_source_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = write_records(
        &dir,
        "hardware.json",
        &json!([
            {"id": 2, "hostname": "web02", "datacenter": {"name": "dal10"},
             "tagReferences": [{"tag": {"name": "prod"}}, {"tag": {"name": "web"}}]},
            {"id": 1, "hostname": "db01", "hardwareStatus": {"status": "ACTIVE"}}
        ]),
    );
    let request = ListRequest::new(EntityKind::Hardware)
        .with_columns(["hostname", "tags", "status"])
        .with_mode(RenderMode::Json);
    let out = run(&request, &JsonFileSource::new(&path)).unwrap();
    let parsed: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        parsed,
        json!([
            {"hostname": "db01", "tags": "-", "status": "ACTIVE"},
            {"hostname": "web02", "tags": "prod,web", "status": "-"}
        ])
    );
}

#[test]
fn test_source_failure_is_reported_with_entity() {
    let dir = TempDir::new().unwrap();
    let path = write_records(&dir, "bad.json", &json!({"id": 1}));
    let err = run(
        &ListRequest::new(EntityKind::Subnet),
        &JsonFileSource::new(&path),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Source {
            entity: EntityKind::Subnet,
            source: SourceError::NotAList(_)
        }
    ));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_user_listing_without_default_sort_keeps_source_order() {
    let source = RecordingSource::new(
        EntityKind::User,
        vec![json!({"id": 3}), json!({"id": 1}), json!({"id": 2})],
    );
    let out = run(
        &ListRequest::new(EntityKind::User)
            .with_columns([ColumnName::new("id")])
            .with_mode(RenderMode::Json),
        &source,
    )
    .unwrap();
    assert_eq!(json_ids(&out), vec!["3", "1", "2"]);
}

#[test]
fn test_virtual_server_listing_defaults_to_hostname_order() {
    let source = RecordingSource::new(
        EntityKind::VirtualServer,
        vec![
            json!({"id": 2, "hostname": "web02", "maxMemory": 4096.0,
                   "activeTransaction": {"transactionStatus": {"name": "RECLAIM_WAIT"}}}),
            json!({"id": 1, "hostname": "db01", "maxCpu": 4, "datacenter": {"name": "dal10"}}),
        ],
    );
    let out = run(
        &ListRequest::new(EntityKind::VirtualServer).with_mode(RenderMode::Json),
        &source,
    )
    .unwrap();
    let parsed: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed[0]["hostname"], "db01");
    assert_eq!(parsed[0]["datacenter"], "dal10");
    assert_eq!(parsed[0]["action"], "-");
    assert_eq!(parsed[1]["memory"], "4096");
    assert_eq!(parsed[1]["action"], "RECLAIM_WAIT");
    assert_eq!(
        source.masks.borrow().as_slice(),
        &["id,hostname,domain,maxCpu,maxMemory,primaryIpAddress,primaryBackendIpAddress,\
datacenter.name,activeTransaction.transactionStatus.name"
            .to_string()]
    );
}

#[test]
fn test_host_guest_rejects_unsortable_action() {
    let source = RecordingSource::new(EntityKind::HostGuest, vec![json!({"id": 1})]);
    let err = run(
        &ListRequest::new(EntityKind::HostGuest).with_sort_key(SortKey::by("action")),
        &source,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Projection(ProjectionError::UnsupportedSortKey(ref c)) if c == "action"
    ));
    assert!(source.masks.borrow().is_empty());
}

#[test]
fn test_repeated_column_emits_one_json_key() {
    let source = RecordingSource::new(EntityKind::Volume, vec![json!({"id": 1})]);
    let out = run(
        &ListRequest::new(EntityKind::Volume)
            .with_columns(["id", "ID"])
            .with_mode(RenderMode::Json),
        &source,
    )
    .unwrap();
    assert_eq!(out.matches("\"id\"").count(), 1);
    let parsed: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, json!([{"id": "1"}]));
}
