//! Core value types shared by the projection pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of record being listed. Each kind has its own registered columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Volume,
    Snapshot,
    AccessHost,
    Subnet,
    Hardware,
    User,
    VirtualServer,
    HostGuest,
}

impl EntityKind {
    /// Every kind, in registry slot order.
    pub const ALL: [EntityKind; 8] = [
        EntityKind::Volume,
        EntityKind::Snapshot,
        EntityKind::AccessHost,
        EntityKind::Subnet,
        EntityKind::Hardware,
        EntityKind::User,
        EntityKind::VirtualServer,
        EntityKind::HostGuest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Volume => "volume",
            EntityKind::Snapshot => "snapshot",
            EntityKind::AccessHost => "access_host",
            EntityKind::Subnet => "subnet",
            EntityKind::Hardware => "hardware",
            EntityKind::User => "user",
            EntityKind::VirtualServer => "virtual_server",
            EntityKind::HostGuest => "host_guest",
        }
    }

    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "volume" => Ok(EntityKind::Volume),
            "snapshot" => Ok(EntityKind::Snapshot),
            "access_host" => Ok(EntityKind::AccessHost),
            "subnet" => Ok(EntityKind::Subnet),
            "hardware" => Ok(EntityKind::Hardware),
            "user" => Ok(EntityKind::User),
            "virtual_server" | "vs" => Ok(EntityKind::VirtualServer),
            "host_guest" => Ok(EntityKind::HostGuest),
            _ => Err(format!(
                "unknown entity kind '{}' (expected one of: volume, snapshot, access-host, subnet, hardware, user, virtual-server, host-guest)",
                s
            )),
        }
    }
}

/// A display column identifier.
///
/// Any ASCII-case spelling of `id` is folded to `id`; every other name is
/// case-sensitive and kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ColumnName(String);

impl ColumnName {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.eq_ignore_ascii_case("id") {
            ColumnName("id".to_string())
        } else {
            ColumnName(name)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnName {
    fn from(s: &str) -> Self {
        ColumnName::new(s)
    }
}

impl FromStr for ColumnName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ColumnName::new(s.trim()))
    }
}

impl<'de> Deserialize<'de> for ColumnName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(ColumnName::new)
    }
}

/// Column to order by. `None` keeps the order the source returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SortKey(Option<ColumnName>);

impl SortKey {
    pub fn none() -> Self {
        SortKey(None)
    }

    pub fn by(column: impl Into<ColumnName>) -> Self {
        SortKey(Some(column.into()))
    }

    pub fn column(&self) -> Option<&ColumnName> {
        self.0.as_ref()
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() {
            SortKey::none()
        } else {
            SortKey::by(s)
        }
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortKey::from(s))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(c) => write!(f, "{}", c),
            None => Ok(()),
        }
    }
}

/// Output presentation, chosen once per invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Table,
    Json,
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" | "text" => Ok(RenderMode::Table),
            "json" => Ok(RenderMode::Json),
            other => Err(format!(
                "invalid output format '{}' (must be 'table' or 'json')",
                other
            )),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Table => f.write_str("table"),
            RenderMode::Json => f.write_str("json"),
        }
    }
}
