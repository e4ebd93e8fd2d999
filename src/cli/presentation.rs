//! CLI presentation: text and json formatters for the describe commands.

use crate::mask::FieldMask;
use crate::registry::{ColumnSpec, DisplayRule, EntityDef, ValueKind};
use comfy_table::{presets, Table};
use serde_json::json;

fn kind_name(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Integer => "integer",
        ValueKind::Text => "text",
        ValueKind::Timestamp => "timestamp",
        ValueKind::Count => "count",
    }
}

fn role(entity: &EntityDef, column: &ColumnSpec) -> &'static str {
    if entity.default_columns().contains(&column.name) {
        "default"
    } else if entity.optional_columns().contains(&column.name) {
        "optional"
    } else {
        "sort only"
    }
}

fn display_note(display: DisplayRule) -> Option<String> {
    match display {
        DisplayRule::Raw => None,
        DisplayRule::Lowercase => Some("lowercase".to_string()),
        DisplayRule::JoinNames(sub) => Some(format!("join {}", sub)),
    }
}

pub fn format_columns_text(entity: &EntityDef) -> String {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_header(vec!["Column", "Label", "Path", "Kind", "Shown", "Sortable"]);
    for column in entity.columns() {
        let kind = match display_note(column.display) {
            Some(note) => format!("{} ({})", kind_name(column.kind), note),
            None => kind_name(column.kind).to_string(),
        };
        let sortable = if entity.is_sortable(&column.name) { "yes" } else { "-" };
        table.add_row(vec![
            column.name.to_string(),
            column.label.clone(),
            column.path.to_string(),
            kind,
            role(entity, column).to_string(),
            sortable.to_string(),
        ]);
    }
    let default_sort = entity.default_sort().to_string();
    format!(
        "{}\n\nDefault sort: {}",
        table,
        if default_sort.is_empty() { "none" } else { default_sort.as_str() }
    )
}

pub fn format_columns_json(entity: &EntityDef) -> String {
    let columns: Vec<serde_json::Value> = entity
        .columns()
        .iter()
        .map(|c| {
            json!({
                "name": c.name,
                "label": c.label,
                "path": c.path,
                "kind": c.kind,
                "default": entity.default_columns().contains(&c.name),
                "optional": entity.optional_columns().contains(&c.name),
                "sortable": entity.is_sortable(&c.name),
            })
        })
        .collect();
    let out = json!({
        "entity": entity.kind(),
        "default_sort": entity.default_sort().column(),
        "columns": columns,
    });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_mask(mask: &FieldMask) -> String {
    mask.to_string()
}
