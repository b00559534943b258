//! Shared domain types for the resolution engine.

pub mod attribute;
pub mod catalog;
pub mod material;

pub use attribute::{AttributeMap, AttributeValue};
pub use catalog::{CatalogEntry, EntryKind};
pub use material::{Material, MaterialResult};
