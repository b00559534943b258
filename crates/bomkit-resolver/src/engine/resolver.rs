//! MaterialsResolver: the entry point tying the stores and the rule
//! language together.

use std::path::Path;

use bomkit_core::config::{BomkitConfig, StorePaths};
use bomkit_core::errors::{BomkitErrorCode, ResolveError, ResolveWarning, StorageError};
use bomkit_core::types::MaterialResult;
use bomkit_storage::queries::{house_types, instances};
use bomkit_storage::StoreHandle;
use serde::Serialize;

use super::{
    applicable_materials, enrich, find_catalog_entries, load_attributes, MaterialAggregator,
    WarningSink,
};

/// How a resolution call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// No house type with the requested id.
    HouseTypeNotFound,
    /// The house type exists but has no project context.
    NoLinkedProject,
    /// Materials were resolved for the linked project. The list may
    /// legitimately be empty.
    Resolved { project_id: i64 },
}

/// The structured result of one call.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub outcome: ResolutionOutcome,
    pub materials: Vec<MaterialResult>,
    pub warnings: Vec<ResolveWarning>,
}

impl Resolution {
    fn without_project(outcome: ResolutionOutcome) -> Self {
        Self {
            outcome,
            materials: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// The three read-only handles of one call.
struct Stores {
    main: StoreHandle,
    catalog: StoreHandle,
    projects: StoreHandle,
}

impl Stores {
    fn open(paths: &StorePaths) -> Result<Self, StorageError> {
        Ok(Self {
            main: StoreHandle::open(&paths.main)?,
            catalog: StoreHandle::open(&paths.catalog)?,
            projects: StoreHandle::open(&paths.projects)?,
        })
    }

    fn close(self) -> Result<(), StorageError> {
        self.main.close()?;
        self.catalog.close()?;
        self.projects.close()
    }
}

/// Resolves the materials a task needs for a house type.
///
/// Holds only store locations. Every call opens its own read-only handles
/// and releases them before returning, so concurrent calls share nothing
/// and nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct MaterialsResolver {
    paths: StorePaths,
}

impl MaterialsResolver {
    pub fn new(paths: StorePaths) -> Self {
        Self { paths }
    }

    /// Build a resolver from loaded configuration and a project root.
    pub fn from_config(config: &BomkitConfig, root: &Path) -> Self {
        Self::new(config.store_paths(root))
    }

    /// Load configuration for `root` and build a resolver from it.
    pub fn load(root: &Path) -> Result<Self, ResolveError> {
        let config = BomkitConfig::load(root)?;
        Ok(Self::from_config(&config, root))
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// Resolve materials, distinguishing "no project context", "resolved"
    /// (possibly zero materials) and dependency failures.
    pub fn resolve(&self, task_id: i64, house_type_id: i64) -> Result<Resolution, ResolveError> {
        let span = tracing::info_span!("resolve", task_id, house_type_id);
        let _guard = span.enter();

        let stores = Stores::open(&self.paths)?;
        // On any `?` below, `stores` drops and every handle is released.
        let resolution = Self::resolve_with(&stores, task_id, house_type_id)?;
        stores.close()?;

        tracing::debug!(
            outcome = ?resolution.outcome,
            materials = resolution.materials.len(),
            warnings = resolution.warnings.len(),
            "resolution finished"
        );
        Ok(resolution)
    }

    /// Fail-closed variant: any error is logged and yields no materials.
    pub fn get_materials_for_task(&self, task_id: i64, house_type_id: i64) -> Vec<MaterialResult> {
        match self.resolve(task_id, house_type_id) {
            Ok(resolution) => resolution.materials,
            Err(e) if e.is_configuration() => {
                tracing::error!(
                    task_id,
                    house_type_id,
                    code = e.error_code(),
                    error = %e,
                    "store configuration error, returning no materials"
                );
                Vec::new()
            }
            Err(e) => {
                tracing::error!(
                    task_id,
                    house_type_id,
                    code = e.error_code(),
                    error = %e,
                    "store access failed, returning no materials"
                );
                Vec::new()
            }
        }
    }

    fn resolve_with(
        stores: &Stores,
        task_id: i64,
        house_type_id: i64,
    ) -> Result<Resolution, StorageError> {
        let project_id = match house_types::find_house_type(stores.main.conn(), house_type_id)? {
            None => {
                tracing::debug!("house type not found");
                return Ok(Resolution::without_project(
                    ResolutionOutcome::HouseTypeNotFound,
                ));
            }
            Some(row) => match row.project_id {
                None => {
                    tracing::debug!("house type has no linked project");
                    return Ok(Resolution::without_project(
                        ResolutionOutcome::NoLinkedProject,
                    ));
                }
                Some(project_id) => project_id,
            },
        };

        let mut sink = WarningSink::new();
        let mut aggregate = MaterialAggregator::new();

        let entries = find_catalog_entries(stores.catalog.conn(), task_id, &mut sink)?;
        for entry in &entries {
            let instance_ids =
                instances::find_instances(stores.projects.conn(), project_id, entry.id, entry.kind)?;
            if instance_ids.is_empty() {
                tracing::debug!(entry_id = entry.id, kind = %entry.kind, "no instances in project");
                continue;
            }
            for instance_id in instance_ids {
                let attributes =
                    load_attributes(stores.projects.conn(), instance_id, entry.kind, &mut sink)?;
                let matched = applicable_materials(
                    stores.catalog.conn(),
                    entry.id,
                    entry.kind,
                    &attributes,
                    &mut sink,
                )?;
                for material in &matched {
                    aggregate.insert(enrich(stores.projects.conn(), project_id, material)?);
                }
            }
        }

        Ok(Resolution {
            outcome: ResolutionOutcome::Resolved { project_id },
            materials: aggregate.into_vec(),
            warnings: sink.into_vec(),
        })
    }
}
