//! Catalog entries: item and accessory definitions shared across projects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two catalog variants. They share a shape but live in distinct tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Item,
    Accessory,
}

impl EntryKind {
    /// All kinds, in the order the engine traverses them.
    pub const ALL: [EntryKind; 2] = [EntryKind::Item, EntryKind::Accessory];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Accessory => "accessory",
        }
    }

    /// Parse a kind name. Unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "item" => Some(Self::Item),
            "accessory" => Some(Self::Accessory),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A catalog entry associated with a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: i64,
    pub name: String,
    pub kind: EntryKind,
}
