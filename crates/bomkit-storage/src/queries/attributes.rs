//! Instance attribute rows (project-instance store).

use bomkit_core::errors::StorageError;
use bomkit_core::types::EntryKind;
use rusqlite::{params, Connection};

use super::tables;
use crate::to_storage_err;

/// An attribute row with its undecoded JSON value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRow {
    pub name: String,
    pub value: Option<String>,
}

/// Attribute rows of one instance in storage order. Rows without a name
/// are not addressable by any condition and are skipped.
pub fn list_attributes(
    conn: &Connection,
    instance_id: i64,
    kind: EntryKind,
) -> Result<Vec<AttributeRow>, StorageError> {
    let t = tables::for_kind(kind);
    let sql = format!(
        "SELECT name, value FROM {table}
         WHERE instance_id = ?1 AND name IS NOT NULL
         ORDER BY rowid ASC",
        table = t.attributes,
    );
    let mut stmt = conn.prepare_cached(&sql).map_err(to_storage_err)?;
    let rows = stmt
        .query_map(params![instance_id], |row| {
            Ok(AttributeRow {
                name: row.get(0)?,
                value: row.get(1)?,
            })
        })
        .map_err(to_storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}
