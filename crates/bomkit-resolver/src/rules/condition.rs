//! A single predicate: attribute name, operator, operand.

use bomkit_core::types::{AttributeMap, AttributeValue};
use bomkit_storage::queries::materials::ConditionRow;

use super::operator::Operator;

/// One parsed condition row. The operand stays textual; each operator
/// coerces it on evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub condition_id: i64,
    pub group_id: i64,
    pub attribute: String,
    pub operator: Operator,
    pub operand: String,
}

impl Condition {
    pub fn new(group_id: i64, attribute: &str, operator: &str, operand: &str) -> Self {
        Self {
            condition_id: 0,
            group_id,
            attribute: attribute.to_string(),
            operator: Operator::parse(operator),
            operand: operand.to_string(),
        }
    }

    /// A NULL operand column reads as the empty string.
    pub fn from_row(row: ConditionRow) -> Self {
        Self {
            condition_id: row.condition_id,
            group_id: row.group_id,
            operator: Operator::parse(&row.operator),
            attribute: row.attribute_name,
            operand: row.operand.unwrap_or_default(),
        }
    }

    /// Evaluate against one instance's attributes.
    pub fn evaluate(&self, attributes: &AttributeMap) -> bool {
        self.operator
            .evaluate(attributes.get(&self.attribute), &self.operand)
    }
}

/// Evaluate one predicate given as raw text.
///
/// Unknown operators evaluate false and are logged at warn level.
pub fn matches(value: Option<&AttributeValue>, operator: &str, operand: &str) -> bool {
    let op = Operator::parse(operator);
    if op.is_unknown() {
        tracing::warn!(operator, "unknown condition operator, evaluating false");
        return false;
    }
    op.evaluate(value, operand)
}
