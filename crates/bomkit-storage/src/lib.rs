//! # bomkit-storage
//!
//! Read-only access to the three external stores: primary, catalog and
//! project-instance. Nothing in this crate writes; schema ownership lies
//! with the processes that populate the stores.

pub mod connection;
pub mod queries;

pub use connection::StoreHandle;

use bomkit_core::errors::StorageError;

/// Convert a rusqlite error, singling out writes rejected by a read-only handle.
pub fn to_storage_err(e: rusqlite::Error) -> StorageError {
    match e.sqlite_error_code() {
        Some(rusqlite::ErrorCode::ReadOnly) => StorageError::ReadOnlyViolation {
            message: e.to_string(),
        },
        _ => StorageError::SqliteError {
            message: e.to_string(),
        },
    }
}
