//! Bill-of-materials enrichment.

use bomkit_core::errors::StorageError;
use bomkit_core::types::{Material, MaterialResult};
use bomkit_storage::queries::bom;
use rusqlite::Connection;

/// Attach the project's quantity and assembly-kit flag to a material.
///
/// Without a bill-of-materials row the quantity is zero and the kit flag
/// absent. The unit always comes from the catalog material.
pub fn enrich(
    conn: &Connection,
    project_id: i64,
    material: &Material,
) -> Result<MaterialResult, StorageError> {
    let entry = bom::find_bom_entry(conn, project_id, material.material_id)?;
    let (quantity, assembly_kit) = match entry {
        Some(row) => (row.quantity, row.assembly_kit),
        None => (0.0, None),
    };
    Ok(MaterialResult {
        material_id: material.material_id,
        material_name: material.name.clone(),
        sku: material.sku.clone(),
        unit: material.unit.clone(),
        quantity,
        assembly_kit,
    })
}
