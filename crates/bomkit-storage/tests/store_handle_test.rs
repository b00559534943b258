//! Tests for scoped read-only store handles.

use bomkit_core::errors::StorageError;
use bomkit_storage::connection::pragmas::is_query_only;
use bomkit_storage::{to_storage_err, StoreHandle};
use test_fixtures::StoreFixture;

#[test]
fn missing_path_is_store_not_found() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("absent.db");

    let err = StoreHandle::open(&path).unwrap_err();
    assert!(matches!(err, StorageError::StoreNotFound { .. }));
    // Opening must never create the file.
    assert!(!path.exists());
}

#[test]
fn directory_path_is_store_not_found() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = StoreHandle::open(dir.path()).unwrap_err();
    assert!(matches!(err, StorageError::StoreNotFound { .. }));
}

#[test]
fn handle_is_query_only() {
    let fx = StoreFixture::new();
    let handle = StoreHandle::open(&fx.main_path()).unwrap();
    assert!(is_query_only(handle.conn()).unwrap());
    handle.close().unwrap();
}

#[test]
fn writes_are_rejected() {
    let fx = StoreFixture::new();
    let handle = StoreHandle::open(&fx.main_path()).unwrap();

    let err = handle
        .conn()
        .execute(
            "INSERT INTO house_types (house_type_id, project_id) VALUES (1, 1)",
            [],
        )
        .unwrap_err();
    assert!(matches!(
        to_storage_err(err),
        StorageError::ReadOnlyViolation { .. }
    ));

    let count: i64 = fx
        .main_conn()
        .query_row("SELECT COUNT(*) FROM house_types", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn with_store_returns_closure_value() {
    let fx = StoreFixture::new();
    fx.house_type(7, Some(70));

    let n: i64 = StoreHandle::with_store(&fx.main_path(), |h| {
        h.conn()
            .query_row("SELECT COUNT(*) FROM house_types", [], |r| r.get(0))
            .map_err(to_storage_err)
    })
    .unwrap();
    assert_eq!(n, 1);
}

#[test]
fn with_store_propagates_closure_error() {
    let fx = StoreFixture::new();

    let result: Result<(), StorageError> = StoreHandle::with_store(&fx.main_path(), |h| {
        h.conn()
            .execute_batch("SELECT * FROM no_such_table")
            .map_err(to_storage_err)
    });
    assert!(matches!(result, Err(StorageError::SqliteError { .. })));

    // The handle from the failed call was released; the file is still usable.
    let handle = StoreHandle::open(&fx.main_path()).unwrap();
    assert_eq!(handle.path(), fx.main_path().as_path());
    handle.close().unwrap();
}
