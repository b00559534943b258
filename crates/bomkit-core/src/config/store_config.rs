//! Store location configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default primary store location, relative to the project root.
pub const DEFAULT_MAIN_DB: &str = "database/main.db";

/// Default project-instance store location, relative to the project root.
pub const DEFAULT_PROJECTS_DB: &str = "database/projects.db";

/// Configured store paths. `None` means "use the default".
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// Primary operational store (house types).
    pub main_db: Option<String>,
    /// Catalog store (items, accessories, materials, conditions).
    /// Defaults to the primary store file.
    pub catalog_db: Option<String>,
    /// Project-instance store (instances, attributes, bill of materials).
    pub projects_db: Option<String>,
}

impl StoreConfig {
    /// Resolve the effective paths against a project root.
    /// Absolute configured paths are used as-is.
    pub fn resolve(&self, root: &Path) -> StorePaths {
        let main = resolve_against(root, self.main_db.as_deref().unwrap_or(DEFAULT_MAIN_DB));
        let catalog = match self.catalog_db.as_deref() {
            Some(p) => resolve_against(root, p),
            None => main.clone(),
        };
        let projects = resolve_against(
            root,
            self.projects_db.as_deref().unwrap_or(DEFAULT_PROJECTS_DB),
        );
        StorePaths {
            main,
            catalog,
            projects,
        }
    }
}

fn resolve_against(root: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}

/// Concrete store file locations consumed by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub main: PathBuf,
    pub catalog: PathBuf,
    pub projects: PathBuf,
}

impl StorePaths {
    /// Catalog tables live in the primary store.
    pub fn shared(main: impl Into<PathBuf>, projects: impl Into<PathBuf>) -> Self {
        let main = main.into();
        Self {
            catalog: main.clone(),
            main,
            projects: projects.into(),
        }
    }
}
