//! # bomkit-resolver
//!
//! Resolves the materials a task needs for a house type.
//!
//! - [`rules`]: the conditional attribute-matching language (operator
//!   table, AND-within-group / OR-across-groups evaluation).
//! - [`engine`]: store traversal, material matching, bill-of-materials
//!   enrichment and aggregation, driven by [`MaterialsResolver`].

pub mod engine;
pub mod rules;

pub use engine::{MaterialsResolver, Resolution, ResolutionOutcome};
pub use rules::{group_conditions, is_applicable, matches, Condition, ConditionGroups, Operator};
