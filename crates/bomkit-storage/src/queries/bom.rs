//! Project bill-of-materials lookups (project-instance store).

use bomkit_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};

use crate::to_storage_err;

/// A bill-of-materials row. Unique per (project, material).
/// A NULL quantity column reads as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct BomRow {
    pub project_id: i64,
    pub material_id: i64,
    pub quantity: f64,
    pub assembly_kit: Option<bool>,
}

/// Fetch the bill-of-materials row for one material in one project.
pub fn find_bom_entry(
    conn: &Connection,
    project_id: i64,
    material_id: i64,
) -> Result<Option<BomRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT project_id, material_id, quantity, assembly_kit
             FROM project_materials
             WHERE project_id = ?1 AND material_id = ?2",
        )
        .map_err(to_storage_err)?;
    stmt.query_row(params![project_id, material_id], |row| {
        Ok(BomRow {
            project_id: row.get(0)?,
            material_id: row.get(1)?,
            quantity: row.get::<_, Option<f64>>(2)?.unwrap_or(0.0),
            assembly_kit: row.get(3)?,
        })
    })
    .optional()
    .map_err(to_storage_err)
}
