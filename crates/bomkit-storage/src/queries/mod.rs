//! Read queries, one module per table family.
//!
//! Every listing has a fixed `ORDER BY` so traversal order, and with it the
//! outcome of last-write-wins aggregation, is deterministic.

pub mod attributes;
pub mod bom;
pub mod catalog;
pub mod house_types;
pub mod instances;
pub mod materials;
pub mod tables;
