// bcg-core/src/domain/ports/diagnostics.rs

use std::fmt;

use crate::domain::asset::AssetKey;

/// Something worth telling the operator about an entry that was skipped.
/// Not an error: the run continues and still succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishDiagnostic {
    /// Ready for publishing, but schema and/or table are missing.
    IncompleteTarget {
        key: AssetKey,
        schema_column: String,
        table_column: String,
        missing_schema: bool,
        missing_table: bool,
    },
}

impl PublishDiagnostic {
    pub fn key(&self) -> &AssetKey {
        match self {
            Self::IncompleteTarget { key, .. } => key,
        }
    }
}

impl fmt::Display for PublishDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteTarget {
                key,
                schema_column,
                table_column,
                ..
            } => write!(
                f,
                "[{}]: Missing information in inventory: \"{}\" or/and \"{}\"",
                key, schema_column, table_column
            ),
        }
    }
}

/// Receives per-entry diagnostics while publish rows are built.
pub trait DiagnosticsSink: Send + Sync {
    fn report(&self, diagnostic: PublishDiagnostic);
}
