//! Scoped read-only store handles.
//!
//! A handle is acquired per resolution call and released when the call
//! ends, on success and on every error path. Handles are never pooled or
//! shared between calls.

pub mod pragmas;

use std::path::{Path, PathBuf};

use bomkit_core::errors::StorageError;
use rusqlite::{Connection, OpenFlags};

use self::pragmas::apply_read_pragmas;
use crate::to_storage_err;

/// An open, read-only connection to one external store.
pub struct StoreHandle {
    conn: Connection,
    path: PathBuf,
}

impl StoreHandle {
    /// Open the store at `path` read-only.
    ///
    /// Fails with [`StorageError::StoreNotFound`] when the file does not
    /// exist; SQLite is never allowed to create it.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if !path.is_file() {
            return Err(StorageError::StoreNotFound {
                path: path.display().to_string(),
            });
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(to_storage_err)?;
        apply_read_pragmas(&conn)?;

        tracing::debug!(path = %path.display(), "store opened read-only");
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Open a store, run `f` against it, and release it whatever `f` returns.
    pub fn with_store<F, T, E>(path: &Path, f: F) -> Result<T, E>
    where
        F: FnOnce(&StoreHandle) -> Result<T, E>,
        E: From<StorageError>,
    {
        let handle = Self::open(path)?;
        let result = f(&handle);
        match result {
            Ok(value) => {
                handle.close()?;
                Ok(value)
            }
            // The drop of `handle` releases the connection on the error path.
            Err(e) => Err(e),
        }
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Release the connection, surfacing any close failure.
    pub fn close(self) -> Result<(), StorageError> {
        let path = self.path;
        self.conn.close().map_err(|(_, e)| to_storage_err(e))?;
        tracing::debug!(path = %path.display(), "store released");
        Ok(())
    }
}

impl std::fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreHandle").field("path", &self.path).finish()
    }
}
