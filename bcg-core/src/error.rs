// bcg-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum BcgError {
    // --- DOMAIN ERRORS (config validation, asset keys) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (workbooks, IO, YAML) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for BcgError {
    fn from(err: std::io::Error) -> Self {
        BcgError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<crate::infrastructure::error::SourceLoadError> for BcgError {
    fn from(err: crate::infrastructure::error::SourceLoadError) -> Self {
        BcgError::Infrastructure(InfrastructureError::SourceLoad(err))
    }
}

impl From<crate::infrastructure::error::SinkWriteError> for BcgError {
    fn from(err: crate::infrastructure::error::SinkWriteError) -> Self {
        BcgError::Infrastructure(InfrastructureError::SinkWrite(err))
    }
}
