// bcg-core/src/domain/ports/mod.rs

pub mod diagnostics;

pub use diagnostics::{DiagnosticsSink, PublishDiagnostic};
