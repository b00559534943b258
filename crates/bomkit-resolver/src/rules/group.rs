//! Condition groups: AND within a group, OR across groups.

use std::collections::BTreeMap;

use bomkit_core::types::AttributeMap;

use super::condition::Condition;

/// Conditions keyed by group id. Iteration is in ascending group id.
pub type ConditionGroups = BTreeMap<i64, Vec<Condition>>;

/// Partition conditions by group id, keeping their order within a group.
pub fn group_conditions(conditions: impl IntoIterator<Item = Condition>) -> ConditionGroups {
    let mut groups = ConditionGroups::new();
    for condition in conditions {
        groups.entry(condition.group_id).or_default().push(condition);
    }
    groups
}

/// Decide whether a material applies to an instance.
///
/// No conditions means unconditionally applicable. Otherwise the first group
/// (ascending id) whose conditions all hold makes the material applicable.
pub fn is_applicable(material_id: i64, groups: &ConditionGroups, attributes: &AttributeMap) -> bool {
    if groups.is_empty() {
        return true;
    }
    for (group_id, conditions) in groups {
        if conditions.iter().all(|c| c.evaluate(attributes)) {
            tracing::trace!(material_id, group_id, "condition group satisfied");
            return true;
        }
    }
    tracing::trace!(material_id, groups = groups.len(), "no condition group satisfied");
    false
}
