// bcg-core/src/infrastructure/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SourceLoadError {
    #[error("Cannot open inventory workbook {path:?}: {source}")]
    #[diagnostic(
        code(bcg::infra::source::workbook),
        help("Check 'inventory_meta_location' and that the file is an Excel/ODS workbook.")
    )]
    Workbook {
        path: PathBuf,
        source: calamine::Error,
    },

    #[error("Worksheet '{sheet}' not found in {path:?} (available: {available:?})")]
    #[diagnostic(code(bcg::infra::source::worksheet))]
    WorksheetNotFound {
        path: PathBuf,
        sheet: String,
        available: Vec<String>,
    },

    #[error("Columns missing from worksheet '{sheet}': {missing:?}")]
    #[diagnostic(
        code(bcg::infra::source::columns),
        help("Every entry of 'inventory_sheet_columns' must appear in the header row.")
    )]
    MissingColumns { sheet: String, missing: Vec<String> },
}

#[derive(Error, Debug, Diagnostic)]
pub enum SinkWriteError {
    #[error("Cannot build publish workbook: {0}")]
    #[diagnostic(code(bcg::infra::sink::xlsx))]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Cannot write publish workbook {path:?}: {source}")]
    #[diagnostic(
        code(bcg::infra::sink::io),
        help("Check that the target directory exists and is writable.")
    )]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- SPREADSHEETS ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    SourceLoad(#[from] SourceLoadError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    SinkWrite(#[from] SinkWriteError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(bcg::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(bcg::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration file not found at '{0}'")]
    #[diagnostic(code(bcg::infra::config_missing))]
    ConfigNotFound(String),
}
