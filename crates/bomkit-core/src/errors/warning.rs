//! Non-fatal diagnostics collected during a resolution call.

use super::error_code::{self, BomkitErrorCode};
use crate::types::EntryKind;

/// A recoverable problem. Resolution continues; the warning is logged and
/// returned alongside the partial result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveWarning {
    #[error("{kind} instance {instance_id}: attribute '{name}' is not valid JSON ({message}), kept as text")]
    MalformedAttribute {
        kind: EntryKind,
        instance_id: i64,
        name: String,
        message: String,
    },

    #[error("{kind} {entry_id}: associated tasks are not a JSON integer list ({message}), entry skipped")]
    MalformedAssociations {
        kind: EntryKind,
        entry_id: i64,
        message: String,
    },

    #[error("material {material_id}: unknown operator '{operator}' evaluates false")]
    UnknownOperator { material_id: i64, operator: String },
}

impl BomkitErrorCode for ResolveWarning {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedAttribute { .. } => error_code::MALFORMED_ATTRIBUTE,
            Self::MalformedAssociations { .. } => error_code::MALFORMED_ASSOCIATIONS,
            Self::UnknownOperator { .. } => error_code::UNKNOWN_OPERATOR,
        }
    }
}
