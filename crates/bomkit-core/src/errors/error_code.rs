//! BomkitErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// to callers that log or forward errors across a process boundary.
pub trait BomkitErrorCode {
    /// Returns the error code string (e.g., "STORE_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const STORE_NOT_FOUND: &str = "STORE_NOT_FOUND";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const READ_ONLY_VIOLATION: &str = "READ_ONLY_VIOLATION";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MALFORMED_ATTRIBUTE: &str = "MALFORMED_ATTRIBUTE";
pub const MALFORMED_ASSOCIATIONS: &str = "MALFORMED_ASSOCIATIONS";
pub const UNKNOWN_OPERATOR: &str = "UNKNOWN_OPERATOR";
