//! Top-level bomkit configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{StoreConfig, StorePaths};
use crate::errors::ConfigError;

/// Name of the project config file, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "bomkit.toml";

pub const ENV_MAIN_DB: &str = "BOMKIT_MAIN_DB";
pub const ENV_CATALOG_DB: &str = "BOMKIT_CATALOG_DB";
pub const ENV_PROJECTS_DB: &str = "BOMKIT_PROJECTS_DB";

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`BOMKIT_*_DB`)
/// 2. Project config (`bomkit.toml` in project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BomkitConfig {
    pub stores: StoreConfig,
}

impl BomkitConfig {
    /// Load configuration with layered resolution for the given project root.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Effective store paths for a project root.
    pub fn store_paths(&self, root: &Path) -> StorePaths {
        self.stores.resolve(root)
    }

    /// Reject configured paths that are present but empty.
    pub fn validate(config: &BomkitConfig) -> Result<(), ConfigError> {
        for (field, value) in [
            ("stores.main_db", &config.stores.main_db),
            ("stores.catalog_db", &config.stores.catalog_db),
            ("stores.projects_db", &config.stores.projects_db),
        ] {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "path must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut BomkitConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: BomkitConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut BomkitConfig, other: &BomkitConfig) {
        if other.stores.main_db.is_some() {
            base.stores.main_db = other.stores.main_db.clone();
        }
        if other.stores.catalog_db.is_some() {
            base.stores.catalog_db = other.stores.catalog_db.clone();
        }
        if other.stores.projects_db.is_some() {
            base.stores.projects_db = other.stores.projects_db.clone();
        }
    }

    fn apply_env_overrides(config: &mut BomkitConfig) {
        if let Ok(val) = std::env::var(ENV_MAIN_DB) {
            config.stores.main_db = Some(val);
        }
        if let Ok(val) = std::env::var(ENV_CATALOG_DB) {
            config.stores.catalog_db = Some(val);
        }
        if let Ok(val) = std::env::var(ENV_PROJECTS_DB) {
            config.stores.projects_db = Some(val);
        }
    }
}
