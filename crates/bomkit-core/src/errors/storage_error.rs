//! Storage-layer errors for read-only SQLite access.

use super::error_code::{self, BomkitErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("store not found: {path}")]
    StoreNotFound { path: String },

    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("write rejected on read-only store: {message}")]
    ReadOnlyViolation { message: String },
}

impl StorageError {
    /// Wrap any displayable SQLite failure.
    pub fn sqlite(e: impl std::fmt::Display) -> Self {
        Self::SqliteError {
            message: e.to_string(),
        }
    }
}

impl BomkitErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::StoreNotFound { .. } => error_code::STORE_NOT_FOUND,
            Self::SqliteError { .. } => error_code::STORAGE_ERROR,
            Self::ReadOnlyViolation { .. } => error_code::READ_ONLY_VIOLATION,
        }
    }
}
