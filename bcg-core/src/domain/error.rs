// bcg-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Configuration Error: {0}")]
    #[diagnostic(
        code(bcg::domain::config),
        help("Check the 'inventory' and 'target_file_config' sections of the YAML file.")
    )]
    ConfigValidation(String),

    #[error("Inventory row {row}: cannot compose asset key, '{column}' is empty")]
    #[diagnostic(
        code(bcg::domain::asset_key),
        help("Every inventory row needs both a 'Path' and a 'File_name' value.")
    )]
    IncompleteAssetKey { row: usize, column: String },

    #[error("Column '{0}' is not part of the projected inventory table")]
    #[diagnostic(code(bcg::domain::unknown_column))]
    UnknownColumn(String),
}
