//! Materials and the per-project resolution result.

use serde::{Deserialize, Serialize};

/// A material as listed in the catalog. Belongs to exactly one catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub material_id: i64,
    pub name: String,
    pub sku: Option<String>,
    pub unit: Option<String>,
}

/// A matched material enriched with project bill-of-materials data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialResult {
    pub material_id: i64,
    pub material_name: String,
    pub sku: Option<String>,
    /// Always the catalog unit, never a unit from the bill of materials.
    pub unit: Option<String>,
    /// Zero when the project has no bill-of-materials row for the material.
    pub quantity: f64,
    pub assembly_kit: Option<bool>,
}
