//! House type lookups (primary store).

use bomkit_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};

use crate::to_storage_err;

/// A house type row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseTypeRow {
    pub house_type_id: i64,
    pub name: Option<String>,
    /// `None` means the house type has no project context.
    pub project_id: Option<i64>,
}

/// Fetch one house type by id.
pub fn find_house_type(
    conn: &Connection,
    house_type_id: i64,
) -> Result<Option<HouseTypeRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT house_type_id, name, project_id FROM house_types WHERE house_type_id = ?1",
        )
        .map_err(to_storage_err)?;
    stmt.query_row(params![house_type_id], |row| {
        Ok(HouseTypeRow {
            house_type_id: row.get(0)?,
            name: row.get(1)?,
            project_id: row.get(2)?,
        })
    })
    .optional()
    .map_err(to_storage_err)
}
