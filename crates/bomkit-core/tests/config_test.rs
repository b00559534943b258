//! Tests for the bomkit configuration system.

use std::path::Path;
use std::sync::Mutex;

use bomkit_core::config::bomkit_config::{ENV_CATALOG_DB, ENV_MAIN_DB, ENV_PROJECTS_DB};
use bomkit_core::config::BomkitConfig;
use bomkit_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all BOMKIT_ store vars to prevent cross-test contamination.
fn clear_bomkit_env_vars() {
    for key in [ENV_MAIN_DB, ENV_CATALOG_DB, ENV_PROJECTS_DB] {
        std::env::remove_var(key);
    }
}

#[test]
fn defaults_resolve_relative_to_project_root() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_bomkit_env_vars();

    let dir = tempdir();
    let config = BomkitConfig::load(dir.path()).unwrap();
    let paths = config.store_paths(dir.path());

    assert_eq!(paths.main, dir.path().join("database/main.db"));
    assert_eq!(paths.projects, dir.path().join("database/projects.db"));
    // Catalog tables default to the primary store.
    assert_eq!(paths.catalog, paths.main);
}

#[test]
fn project_file_overrides_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_bomkit_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("bomkit.toml"),
        r#"
[stores]
main_db = "data/core.db"
catalog_db = "data/catalog.db"
"#,
    )
    .unwrap();

    let config = BomkitConfig::load(dir.path()).unwrap();
    let paths = config.store_paths(dir.path());
    assert_eq!(paths.main, dir.path().join("data/core.db"));
    assert_eq!(paths.catalog, dir.path().join("data/catalog.db"));
    assert_eq!(paths.projects, dir.path().join("database/projects.db"));
}

#[test]
fn env_overrides_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_bomkit_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("bomkit.toml"),
        "[stores]\nprojects_db = \"data/projects.db\"\n",
    )
    .unwrap();
    std::env::set_var(ENV_PROJECTS_DB, "/srv/bomkit/projects.db");

    let config = BomkitConfig::load(dir.path()).unwrap();
    let paths = config.store_paths(dir.path());
    assert_eq!(paths.projects, Path::new("/srv/bomkit/projects.db"));

    clear_bomkit_env_vars();
}

#[test]
fn invalid_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_bomkit_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("bomkit.toml"), "[stores\nmain_db = 1").unwrap();

    let err = BomkitConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn empty_path_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_bomkit_env_vars();

    std::env::set_var(ENV_MAIN_DB, "  ");
    let dir = tempdir();
    let err = BomkitConfig::load(dir.path()).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "stores.main_db"),
        other => panic!("expected validation failure, got {other:?}"),
    }

    clear_bomkit_env_vars();
}

#[test]
fn unknown_keys_are_ignored() {
    let config = BomkitConfig::from_toml(
        r#"
[stores]
main_db = "main.db"

[server]
port = 8080
"#,
    )
    .unwrap();
    assert_eq!(config.stores.main_db.as_deref(), Some("main.db"));
}

#[test]
fn toml_roundtrip_preserves_stores() {
    let config = BomkitConfig::from_toml("[stores]\ncatalog_db = \"cat.db\"\n").unwrap();
    let rendered = config.to_toml().unwrap();
    let reparsed = BomkitConfig::from_toml(&rendered).unwrap();
    assert_eq!(config, reparsed);
}
