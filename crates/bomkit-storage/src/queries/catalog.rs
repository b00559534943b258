//! Catalog entry listings (catalog store).

use bomkit_core::errors::StorageError;
use bomkit_core::types::EntryKind;
use rusqlite::Connection;

use super::tables;
use crate::to_storage_err;

/// A catalog entry with its undecoded association list. A NULL name reads
/// as the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub id: i64,
    pub name: String,
    /// JSON-encoded list of task ids, as stored.
    pub associated_tasks: Option<String>,
}

/// List every entry of one kind, ordered by id.
pub fn list_entries(conn: &Connection, kind: EntryKind) -> Result<Vec<CatalogRow>, StorageError> {
    let t = tables::for_kind(kind);
    let sql = format!(
        "SELECT {id}, name, associated_tasks FROM {table} ORDER BY {id} ASC",
        id = t.catalog_id,
        table = t.catalog,
    );
    let mut stmt = conn.prepare_cached(&sql).map_err(to_storage_err)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(CatalogRow {
                id: row.get(0)?,
                name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                associated_tasks: row.get(2)?,
            })
        })
        .map_err(to_storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}
