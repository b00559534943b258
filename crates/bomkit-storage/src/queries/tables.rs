//! Table and column names per catalog kind.

use bomkit_core::types::EntryKind;

/// Names of the tables and key columns that hold one catalog kind.
#[derive(Debug, Clone, Copy)]
pub struct KindTables {
    pub catalog: &'static str,
    pub catalog_id: &'static str,
    pub instances: &'static str,
    pub attributes: &'static str,
    /// Foreign key column naming the catalog entry, in both the instance
    /// table and the materials table.
    pub entry_fk: &'static str,
}

pub fn for_kind(kind: EntryKind) -> KindTables {
    match kind {
        EntryKind::Item => KindTables {
            catalog: "items",
            catalog_id: "item_id",
            instances: "item_instances",
            attributes: "item_instance_attributes",
            entry_fk: "item_id",
        },
        EntryKind::Accessory => KindTables {
            catalog: "accessories",
            catalog_id: "accessory_id",
            instances: "accessory_instances",
            attributes: "accessory_instance_attributes",
            entry_fk: "accessory_id",
        },
    }
}
