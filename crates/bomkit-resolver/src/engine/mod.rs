//! Resolution engine: store traversal, matching, enrichment, aggregation.

pub mod aggregator;
pub mod attributes;
pub mod catalog;
pub mod enricher;
pub mod matcher;
pub mod resolver;

pub use aggregator::{merge, MaterialAggregator};
pub use attributes::{load_attributes, load_attributes_for_kind_name};
pub use catalog::{decode_task_ids, find_catalog_entries};
pub use enricher::enrich;
pub use matcher::applicable_materials;
pub use resolver::{MaterialsResolver, Resolution, ResolutionOutcome};

use bomkit_core::errors::{BomkitErrorCode, ResolveWarning};

/// Collects non-fatal warnings for one resolution call.
///
/// Each distinct warning is logged once and kept once; the same malformed
/// row reached through several instances does not repeat.
#[derive(Debug, Default)]
pub struct WarningSink {
    warnings: Vec<ResolveWarning>,
}

impl WarningSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, warning: ResolveWarning) {
        if self.warnings.contains(&warning) {
            return;
        }
        tracing::warn!(code = warning.error_code(), "{warning}");
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[ResolveWarning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn into_vec(self) -> Vec<ResolveWarning> {
        self.warnings
    }
}
