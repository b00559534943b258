//! Project-scoped instance lookups (project-instance store).

use bomkit_core::errors::StorageError;
use bomkit_core::types::EntryKind;
use rusqlite::{params, Connection};

use super::tables;
use crate::to_storage_err;

/// Instance ids of one catalog entry within one project, ordered by id.
/// An empty result is a normal outcome.
pub fn find_instances(
    conn: &Connection,
    project_id: i64,
    entry_id: i64,
    kind: EntryKind,
) -> Result<Vec<i64>, StorageError> {
    let t = tables::for_kind(kind);
    let sql = format!(
        "SELECT instance_id FROM {table}
         WHERE project_id = ?1 AND {fk} = ?2
         ORDER BY instance_id ASC",
        table = t.instances,
        fk = t.entry_fk,
    );
    let mut stmt = conn.prepare_cached(&sql).map_err(to_storage_err)?;
    let rows = stmt
        .query_map(params![project_id, entry_id], |row| row.get(0))
        .map_err(to_storage_err)?;
    rows.collect::<Result<Vec<i64>, _>>().map_err(to_storage_err)
}
