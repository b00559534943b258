//! Conditional attribute-matching rule language.

pub mod condition;
pub mod group;
pub mod operator;

pub use condition::{matches, Condition};
pub use group::{group_conditions, is_applicable, ConditionGroups};
pub use operator::Operator;
