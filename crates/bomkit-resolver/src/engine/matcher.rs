//! Material matching: which of an entry's materials apply to an instance.

use bomkit_core::errors::{ResolveWarning, StorageError};
use bomkit_core::types::{AttributeMap, EntryKind, Material};
use bomkit_storage::queries::materials;
use rusqlite::Connection;

use super::WarningSink;
use crate::rules::{group_conditions, is_applicable, Condition};

/// Materials of one catalog entry that apply given the instance attributes.
///
/// Output keeps the listing order (material id). Conditions with an unknown
/// operator are reported once and evaluate false.
pub fn applicable_materials(
    conn: &Connection,
    entry_id: i64,
    kind: EntryKind,
    attributes: &AttributeMap,
    sink: &mut WarningSink,
) -> Result<Vec<Material>, StorageError> {
    let mut matched = Vec::new();
    for material in materials::list_materials(conn, entry_id, kind)? {
        let conditions: Vec<Condition> = materials::list_conditions(conn, material.material_id)?
            .into_iter()
            .map(Condition::from_row)
            .collect();
        for condition in conditions.iter().filter(|c| c.operator.is_unknown()) {
            sink.record(ResolveWarning::UnknownOperator {
                material_id: material.material_id,
                operator: condition.operator.to_string(),
            });
        }

        let groups = group_conditions(conditions);
        if is_applicable(material.material_id, &groups, attributes) {
            matched.push(material);
        }
    }
    Ok(matched)
}
