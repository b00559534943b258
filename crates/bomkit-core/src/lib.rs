//! # bomkit-core
//!
//! Foundation crate for the bomkit materials resolution engine.
//! Defines the shared types, errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{BomkitConfig, StorePaths};
pub use errors::{BomkitErrorCode, ConfigError, ResolveError, ResolveWarning, StorageError};
pub use types::{AttributeValue, CatalogEntry, EntryKind, Material, MaterialResult};
