//! Instance attribute loading.

use bomkit_core::errors::{ResolveWarning, StorageError};
use bomkit_core::types::{AttributeMap, AttributeValue, EntryKind};
use bomkit_storage::queries::attributes;
use rusqlite::Connection;

use super::WarningSink;

/// Load one instance's attributes, decoding each stored JSON value.
///
/// A value that is not valid JSON is kept as raw text and reported as a
/// warning. Duplicate names resolve to the last row.
pub fn load_attributes(
    conn: &Connection,
    instance_id: i64,
    kind: EntryKind,
    sink: &mut WarningSink,
) -> Result<AttributeMap, StorageError> {
    let rows = attributes::list_attributes(conn, instance_id, kind)?;
    let mut map = AttributeMap::with_capacity(rows.len());
    for row in rows {
        let (value, error) = AttributeValue::decode_lossy(row.value.as_deref());
        if let Some(e) = error {
            sink.record(ResolveWarning::MalformedAttribute {
                kind,
                instance_id,
                name: row.name.clone(),
                message: e.to_string(),
            });
        }
        map.insert(row.name, value);
    }
    Ok(map)
}

/// Like [`load_attributes`], with the kind given by name. An unknown kind
/// name yields an empty map.
pub fn load_attributes_for_kind_name(
    conn: &Connection,
    instance_id: i64,
    kind: &str,
    sink: &mut WarningSink,
) -> Result<AttributeMap, StorageError> {
    match EntryKind::parse(kind) {
        Some(kind) => load_attributes(conn, instance_id, kind, sink),
        None => {
            tracing::debug!(instance_id, kind, "unknown instance kind, no attributes");
            Ok(AttributeMap::new())
        }
    }
}
