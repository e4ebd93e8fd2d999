//! Property-based tests for ordering and sentinel guarantees

use proptest::prelude::*;
use serde_json::{json, Value};
use sltable::project::{project, SENTINEL};
use sltable::record::DomainRecord;
use sltable::registry::Registry;
use sltable::select::select;
use sltable::sort::SortDispatcher;
use sltable::{ColumnName, EntityKind, ProjectionError, SortKey};

fn volume_records(values: &[(Option<i64>, u8)]) -> Vec<DomainRecord> {
    values
        .iter()
        .enumerate()
        .map(|(seq, (id, cap))| {
            let mut record = json!({"seq": seq, "capacityGb": cap});
            if let Some(id) = id {
                record["id"] = json!(id);
            }
            DomainRecord::new(record)
        })
        .collect()
}

fn seqs(records: &[DomainRecord]) -> Vec<u64> {
    records
        .iter()
        .map(|r| r.as_value()["seq"].as_u64().unwrap())
        .collect()
}

proptest! {
    /// Records with equal keys keep their input order.
    #[test]
    fn prop_sort_is_stable(values in prop::collection::vec((any::<Option<i64>>(), 0u8..4), 0..40)) {
        let registry = Registry::builtin().unwrap();
        let sorter = SortDispatcher::new(&registry);
        let sorted = sorter.sort(EntityKind::Volume, &SortKey::by("capacity_gb"), volume_records(&values));

        let caps: Vec<u64> = sorted.iter().map(|r| r.as_value()["capacityGb"].as_u64().unwrap()).collect();
        prop_assert!(caps.windows(2).all(|w| w[0] <= w[1]));

        let order = seqs(&sorted);
        for pair in sorted.windows(2).zip(order.windows(2)) {
            let (records, seq) = pair;
            if records[0].as_value()["capacityGb"] == records[1].as_value()["capacityGb"] {
                prop_assert!(seq[0] < seq[1]);
            }
        }
    }

    /// `id` and `ID` are the same sort key.
    #[test]
    fn prop_id_alias_sorts_identically(values in prop::collection::vec((any::<Option<i64>>(), 0u8..4), 0..40)) {
        let registry = Registry::builtin().unwrap();
        let sorter = SortDispatcher::new(&registry);
        let lower = sorter.sort(EntityKind::Volume, &SortKey::from("id"), volume_records(&values));
        let upper = sorter.sort(EntityKind::Volume, &SortKey::from("ID"), volume_records(&values));
        prop_assert_eq!(seqs(&lower), seqs(&upper));

        let absent = values.iter().filter(|(id, _)| id.is_none()).count();
        prop_assert!(lower[..absent].iter().all(|r| r.as_value().get("id").is_none()));
    }

    /// Absent fields project to the sentinel; present zero and empty never do.
    #[test]
    fn prop_sentinel_only_for_absent(cap in prop::option::of(0i64..3), name in prop::option::of("[a-z]{0,3}")) {
        let registry = Registry::builtin().unwrap();
        let volume = registry.entity(EntityKind::Volume);
        let mut record = json!({});
        if let Some(cap) = cap {
            record["capacityGb"] = json!(cap);
        }
        if let Some(ref name) = name {
            record["username"] = Value::String(name.clone());
        }
        let columns = [ColumnName::new("capacity_gb"), ColumnName::new("username")];
        let row = project(volume, &DomainRecord::new(record), &columns);

        let expected_cap = cap.map(|c| c.to_string());
        prop_assert_eq!(
            row.get(&columns[0]),
            Some(expected_cap.as_deref().unwrap_or(SENTINEL))
        );
        prop_assert_eq!(
            row.get(&columns[1]),
            Some(name.as_deref().unwrap_or(SENTINEL))
        );
    }

    /// Unregistered display columns are always rejected.
    #[test]
    fn prop_unknown_column_rejected(name in "[a-z]{8,12}") {
        let registry = Registry::builtin().unwrap();
        for entity in registry.entities() {
            let column = ColumnName::new(format!("x_{}", name));
            prop_assert_eq!(
                select(entity, &SortKey::none(), &[column.clone()]).unwrap_err(),
                ProjectionError::UnsupportedColumn(column.to_string())
            );
        }
    }
}

#[test]
fn test_default_selection_is_deterministic() {
    let registry = Registry::builtin().unwrap();
    for entity in registry.entities() {
        let first = select(entity, &SortKey::none(), &[]).unwrap();
        let second = select(entity, &SortKey::none(), &[]).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.columns(), entity.default_columns());
    }
}
