//! PRAGMA configuration applied to every read-only connection.
//!
//! query_only ON, 5s busy_timeout, 16MB page cache, temp_store MEMORY.

use bomkit_core::errors::StorageError;
use rusqlite::Connection;

/// Apply read-only pragmas to a connection.
pub fn apply_read_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        PRAGMA query_only = ON;
        PRAGMA busy_timeout = 5000;
        PRAGMA cache_size = -16000;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(|e| StorageError::SqliteError {
        message: format!("failed to apply read pragmas: {e}"),
    })
}

/// Report whether writes are refused on this connection.
pub fn is_query_only(conn: &Connection) -> Result<bool, StorageError> {
    let on: i64 = conn
        .pragma_query_value(None, "query_only", |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
    Ok(on != 0)
}
