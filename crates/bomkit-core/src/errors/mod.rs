//! Error handling for bomkit.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod resolve_error;
pub mod storage_error;
pub mod warning;

pub use config_error::ConfigError;
pub use error_code::BomkitErrorCode;
pub use resolve_error::ResolveError;
pub use storage_error::StorageError;
pub use warning::ResolveWarning;
