// bcg-core/src/infrastructure/diagnostics.rs

use std::sync::{Mutex, PoisonError};

use crate::domain::ports::{DiagnosticsSink, PublishDiagnostic};

/// Prints each diagnostic on stderr as soon as it is reported.
#[derive(Debug, Default)]
pub struct ConsoleDiagnostics;

impl DiagnosticsSink for ConsoleDiagnostics {
    fn report(&self, diagnostic: PublishDiagnostic) {
        eprintln!("\n   ⚠️  {}\n", diagnostic);
    }
}

/// Keeps diagnostics in memory, in report order.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    entries: Mutex<Vec<PublishDiagnostic>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<PublishDiagnostic> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticsSink for MemoryDiagnostics {
    fn report(&self, diagnostic: PublishDiagnostic) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}
