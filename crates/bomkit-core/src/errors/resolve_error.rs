//! Resolution errors. Aggregates subsystem errors via `From` conversions.

use super::error_code::BomkitErrorCode;
use super::{ConfigError, StorageError};

/// Errors that abort a single resolution call.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ResolveError {
    /// True for the configuration class: a configured store path is missing
    /// or the config itself is invalid. Everything else is a store access failure.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Storage(StorageError::StoreNotFound { .. })
        )
    }
}

impl BomkitErrorCode for ResolveError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
