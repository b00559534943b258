//! Catalog resolution: which items and accessories a task uses.

use bomkit_core::errors::{ResolveWarning, StorageError};
use bomkit_core::types::{CatalogEntry, EntryKind};
use bomkit_storage::queries::catalog;
use rusqlite::Connection;

use super::WarningSink;

/// Decode a stored association list into task ids.
///
/// Only a JSON array of integers is valid. Anything else, including an
/// array holding strings or fractional numbers, is an error.
pub fn decode_task_ids(raw: &str) -> Result<Vec<i64>, String> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    match value {
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_i64()
                    .ok_or_else(|| format!("non-integer element {item}"))
            })
            .collect(),
        other => Err(format!("expected a JSON array, found {other}")),
    }
}

/// Catalog entries of both kinds whose association list contains `task_id`.
///
/// Items come first, then accessories, each ordered by id. Entries with a
/// malformed list are skipped with a warning; NULL or blank lists simply
/// associate with nothing.
pub fn find_catalog_entries(
    conn: &Connection,
    task_id: i64,
    sink: &mut WarningSink,
) -> Result<Vec<CatalogEntry>, StorageError> {
    let mut entries = Vec::new();
    for kind in EntryKind::ALL {
        for row in catalog::list_entries(conn, kind)? {
            let Some(raw) = row.associated_tasks.as_deref() else {
                continue;
            };
            if raw.trim().is_empty() {
                continue;
            }
            match decode_task_ids(raw) {
                Ok(task_ids) if task_ids.contains(&task_id) => entries.push(CatalogEntry {
                    id: row.id,
                    name: row.name,
                    kind,
                }),
                Ok(_) => {}
                Err(message) => sink.record(ResolveWarning::MalformedAssociations {
                    kind,
                    entry_id: row.id,
                    message,
                }),
            }
        }
    }
    tracing::debug!(task_id, entries = entries.len(), "catalog entries resolved");
    Ok(entries)
}
