//! Renderer: turns projected rows into table or JSON text.
//!
//! Table mode uses the registered column labels as headers. JSON mode emits
//! an array of objects keyed by column name, values as strings.

use crate::project::ProjectedRow;
use crate::registry::EntityDef;
use crate::types::{ColumnName, RenderMode};
use comfy_table::{presets, ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Border preset for table output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    #[default]
    Plain,
    Ascii,
    Utf8,
}

impl TableStyle {
    fn preset(self) -> &'static str {
        match self {
            TableStyle::Plain => presets::NOTHING,
            TableStyle::Ascii => presets::ASCII_FULL,
            TableStyle::Utf8 => presets::UTF8_FULL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TableStyle::Plain => "plain",
            TableStyle::Ascii => "ascii",
            TableStyle::Utf8 => "utf8",
        }
    }
}

impl fmt::Display for TableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(TableStyle::Plain),
            "ascii" => Ok(TableStyle::Ascii),
            "utf8" => Ok(TableStyle::Utf8),
            other => Err(format!("unknown table style '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    style: TableStyle,
}

impl Renderer {
    pub fn new(style: TableStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> TableStyle {
        self.style
    }

    pub fn render(
        &self,
        mode: RenderMode,
        entity: &EntityDef,
        columns: &[ColumnName],
        rows: &[ProjectedRow],
    ) -> String {
        match mode {
            RenderMode::Table => self.render_table(entity, columns, rows),
            RenderMode::Json => render_json(rows),
        }
    }

    fn render_table(
        &self,
        entity: &EntityDef,
        columns: &[ColumnName],
        rows: &[ProjectedRow],
    ) -> String {
        let mut table = Table::new();
        table.load_preset(self.style.preset());
        table.set_content_arrangement(ContentArrangement::Disabled);
        table.set_header(columns.iter().map(|c| entity.label(c)).collect::<Vec<_>>());
        for row in rows {
            table.add_row(row.values().collect::<Vec<_>>());
        }
        table.to_string()
    }
}

fn render_json(rows: &[ProjectedRow]) -> String {
    serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".to_string())
}
