//! Store fixtures for bomkit integration tests.
//!
//! Creates the primary and project-instance store files in a temp
//! directory with the schema the resolver reads, and offers one seeding
//! helper per table. The catalog tables live in the primary store file,
//! matching the default configuration.
//!
//! All helpers panic on failure; this crate is only used from tests and
//! benchmarks.

use std::path::{Path, PathBuf};

use bomkit_core::config::StorePaths;
use bomkit_core::types::EntryKind;
use rusqlite::{params, Connection};
use tempfile::TempDir;

/// Schema of the primary store, including the catalog tables.
pub const MAIN_SCHEMA: &str = "
    CREATE TABLE house_types (
        house_type_id INTEGER PRIMARY KEY,
        name TEXT,
        project_id INTEGER
    );
    CREATE TABLE items (
        item_id INTEGER PRIMARY KEY,
        name TEXT,
        associated_tasks TEXT
    );
    CREATE TABLE accessories (
        accessory_id INTEGER PRIMARY KEY,
        name TEXT,
        associated_tasks TEXT
    );
    CREATE TABLE materials (
        material_id INTEGER PRIMARY KEY,
        name TEXT,
        sku TEXT,
        unit TEXT,
        item_id INTEGER,
        accessory_id INTEGER,
        CHECK ((item_id IS NULL) <> (accessory_id IS NULL))
    );
    CREATE TABLE material_conditions (
        condition_id INTEGER PRIMARY KEY,
        material_id INTEGER NOT NULL,
        group_id INTEGER NOT NULL,
        attribute_name TEXT,
        operator TEXT,
        operand TEXT
    );
";

/// Schema of the project-instance store.
pub const PROJECTS_SCHEMA: &str = "
    CREATE TABLE item_instances (
        instance_id INTEGER PRIMARY KEY,
        project_id INTEGER NOT NULL,
        item_id INTEGER NOT NULL
    );
    CREATE TABLE accessory_instances (
        instance_id INTEGER PRIMARY KEY,
        project_id INTEGER NOT NULL,
        accessory_id INTEGER NOT NULL
    );
    CREATE TABLE item_instance_attributes (
        instance_id INTEGER NOT NULL,
        name TEXT,
        value TEXT
    );
    CREATE TABLE accessory_instance_attributes (
        instance_id INTEGER NOT NULL,
        name TEXT,
        value TEXT
    );
    CREATE TABLE project_materials (
        project_id INTEGER NOT NULL,
        material_id INTEGER NOT NULL,
        quantity REAL,
        assembly_kit INTEGER,
        UNIQUE (project_id, material_id)
    );
";

/// A pair of seeded store files in a temp directory.
///
/// The writable connections stay open for seeding; the resolver opens its
/// own read-only handles against the same files.
pub struct StoreFixture {
    dir: TempDir,
    main: Connection,
    projects: Connection,
}

impl StoreFixture {
    /// Create both store files with the full schema.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let main = Connection::open(dir.path().join("main.db")).expect("open main store");
        main.execute_batch(MAIN_SCHEMA).expect("create main schema");
        let projects =
            Connection::open(dir.path().join("projects.db")).expect("open projects store");
        projects
            .execute_batch(PROJECTS_SCHEMA)
            .expect("create projects schema");
        Self {
            dir,
            main,
            projects,
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn main_path(&self) -> PathBuf {
        self.dir.path().join("main.db")
    }

    pub fn projects_path(&self) -> PathBuf {
        self.dir.path().join("projects.db")
    }

    /// Store paths with the catalog in the primary store file.
    pub fn paths(&self) -> StorePaths {
        StorePaths::shared(self.main_path(), self.projects_path())
    }

    /// Writable connection to the primary store, for ad-hoc seeding.
    pub fn main_conn(&self) -> &Connection {
        &self.main
    }

    /// Writable connection to the project-instance store, for ad-hoc seeding.
    pub fn projects_conn(&self) -> &Connection {
        &self.projects
    }

    pub fn house_type(&self, house_type_id: i64, project_id: Option<i64>) -> &Self {
        self.main
            .execute(
                "INSERT INTO house_types (house_type_id, name, project_id) VALUES (?1, ?2, ?3)",
                params![house_type_id, format!("house type {house_type_id}"), project_id],
            )
            .expect("insert house type");
        self
    }

    /// Insert a catalog entry. `associated_tasks` is stored verbatim.
    pub fn entry(
        &self,
        kind: EntryKind,
        entry_id: i64,
        name: &str,
        associated_tasks: Option<&str>,
    ) -> &Self {
        let (table, id) = match kind {
            EntryKind::Item => ("items", "item_id"),
            EntryKind::Accessory => ("accessories", "accessory_id"),
        };
        self.main
            .execute(
                &format!("INSERT INTO {table} ({id}, name, associated_tasks) VALUES (?1, ?2, ?3)"),
                params![entry_id, name, associated_tasks],
            )
            .expect("insert catalog entry");
        self
    }

    pub fn material(
        &self,
        kind: EntryKind,
        entry_id: i64,
        material_id: i64,
        name: &str,
        sku: Option<&str>,
        unit: Option<&str>,
    ) -> &Self {
        let fk = match kind {
            EntryKind::Item => "item_id",
            EntryKind::Accessory => "accessory_id",
        };
        self.main
            .execute(
                &format!(
                    "INSERT INTO materials (material_id, name, sku, unit, {fk})
                     VALUES (?1, ?2, ?3, ?4, ?5)"
                ),
                params![material_id, name, sku, unit, entry_id],
            )
            .expect("insert material");
        self
    }

    pub fn condition(
        &self,
        material_id: i64,
        group_id: i64,
        attribute_name: &str,
        operator: &str,
        operand: Option<&str>,
    ) -> &Self {
        self.main
            .execute(
                "INSERT INTO material_conditions (material_id, group_id, attribute_name, operator, operand)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![material_id, group_id, attribute_name, operator, operand],
            )
            .expect("insert condition");
        self
    }

    pub fn instance(
        &self,
        kind: EntryKind,
        instance_id: i64,
        project_id: i64,
        entry_id: i64,
    ) -> &Self {
        let (table, fk) = match kind {
            EntryKind::Item => ("item_instances", "item_id"),
            EntryKind::Accessory => ("accessory_instances", "accessory_id"),
        };
        self.projects
            .execute(
                &format!("INSERT INTO {table} (instance_id, project_id, {fk}) VALUES (?1, ?2, ?3)"),
                params![instance_id, project_id, entry_id],
            )
            .expect("insert instance");
        self
    }

    /// Insert an attribute row. `raw_value` is the stored JSON text, or SQL NULL.
    pub fn attribute(
        &self,
        kind: EntryKind,
        instance_id: i64,
        name: &str,
        raw_value: Option<&str>,
    ) -> &Self {
        let table = match kind {
            EntryKind::Item => "item_instance_attributes",
            EntryKind::Accessory => "accessory_instance_attributes",
        };
        self.projects
            .execute(
                &format!("INSERT INTO {table} (instance_id, name, value) VALUES (?1, ?2, ?3)"),
                params![instance_id, name, raw_value],
            )
            .expect("insert attribute");
        self
    }

    pub fn bom(
        &self,
        project_id: i64,
        material_id: i64,
        quantity: f64,
        assembly_kit: Option<bool>,
    ) -> &Self {
        self.projects
            .execute(
                "INSERT INTO project_materials (project_id, material_id, quantity, assembly_kit)
                 VALUES (?1, ?2, ?3, ?4)",
                params![project_id, material_id, quantity, assembly_kit],
            )
            .expect("insert bill of materials row");
        self
    }
}

impl Default for StoreFixture {
    fn default() -> Self {
        Self::new()
    }
}
