//! Material and material condition listings (catalog store).

use bomkit_core::errors::StorageError;
use bomkit_core::types::{EntryKind, Material};
use rusqlite::{params, Connection};

use super::tables;
use crate::to_storage_err;

/// One predicate of a material's applicability rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionRow {
    pub condition_id: i64,
    pub material_id: i64,
    pub group_id: i64,
    pub attribute_name: String,
    pub operator: String,
    pub operand: Option<String>,
}

/// Materials keyed to one catalog entry, ordered by material id.
/// A NULL name reads as the empty string.
pub fn list_materials(
    conn: &Connection,
    entry_id: i64,
    kind: EntryKind,
) -> Result<Vec<Material>, StorageError> {
    let t = tables::for_kind(kind);
    let sql = format!(
        "SELECT material_id, name, sku, unit FROM materials
         WHERE {fk} = ?1
         ORDER BY material_id ASC",
        fk = t.entry_fk,
    );
    let mut stmt = conn.prepare_cached(&sql).map_err(to_storage_err)?;
    let rows = stmt
        .query_map(params![entry_id], |row| {
            Ok(Material {
                material_id: row.get(0)?,
                name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                sku: row.get(2)?,
                unit: row.get(3)?,
            })
        })
        .map_err(to_storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

/// Condition rows of one material, ordered by group then condition id.
/// NULL attribute names and operators read as the empty string; an empty
/// operator is unknown and never holds.
pub fn list_conditions(
    conn: &Connection,
    material_id: i64,
) -> Result<Vec<ConditionRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT condition_id, material_id, group_id, attribute_name, operator, operand
             FROM material_conditions
             WHERE material_id = ?1
             ORDER BY group_id ASC, condition_id ASC",
        )
        .map_err(to_storage_err)?;
    let rows = stmt
        .query_map(params![material_id], |row| {
            Ok(ConditionRow {
                condition_id: row.get(0)?,
                material_id: row.get(1)?,
                group_id: row.get(2)?,
                attribute_name: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                operator: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                operand: row.get(5)?,
            })
        })
        .map_err(to_storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}
