// bcg/src/commands/preview.rs
//
// USE CASE: Show the BCG entries a run would produce, without writing.

use std::path::PathBuf;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use miette::{IntoDiagnostic, Report};
use serde_json::json;

use bcg_core::BcgError;
use bcg_core::application::RepositoryTransformer;
use bcg_core::domain::{PublishTable, PublishTargetConfig};
use bcg_core::infrastructure::adapters::CalamineInventorySource;
use bcg_core::infrastructure::diagnostics::MemoryDiagnostics;
use bcg_core::infrastructure::error::SinkWriteError;
use bcg_core::ports::PublishSink;

use super::load_config;
use crate::cli::PreviewFormat;

/// Preview never reaches the write stage; this sink refuses if it ever does.
struct NoWriteSink;

impl PublishSink for NoWriteSink {
    fn write(&self, config: &PublishTargetConfig, _: &PublishTable) -> Result<(), BcgError> {
        Err(SinkWriteError::Io {
            path: config.workbook.clone(),
            source: std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "preview does not write workbooks",
            ),
        }
        .into())
    }
}

pub fn execute(config_path: PathBuf, limit: usize, format: PreviewFormat) -> miette::Result<()> {
    let config = load_config(&config_path)?;

    let source = CalamineInventorySource;
    let sink = NoWriteSink;
    let diagnostics = MemoryDiagnostics::new();
    let transformer = RepositoryTransformer::new(
        config.inventory,
        config.target,
        &source,
        &sink,
        &diagnostics,
    );

    // Stop before the write stage
    let outcome = transformer
        .load_inventory_table()
        .and_then(|table| transformer.build_asset_index(&table))
        .map(|index| transformer.build_publish_rows(&index))
        .map_err(|e| Report::new(e).wrap_err("💥 PREVIEW FAILED"))?;

    let skipped: Vec<String> = diagnostics.entries().iter().map(|d| d.to_string()).collect();

    match format {
        PreviewFormat::Json => {
            let rows: Vec<_> = outcome.table.to_records().into_iter().take(limit).collect();
            let document = json!({
                "published": outcome.table.len(),
                "not_ready": outcome.not_ready,
                "incomplete": outcome.incomplete,
                "rows": rows,
                "skipped": skipped,
            });
            println!("{}", serde_json::to_string_pretty(&document).into_diagnostic()?);
        }
        PreviewFormat::Table => {
            println!(
                "\n👀 {} BCG entries (showing up to {})",
                outcome.table.len(),
                limit
            );

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(outcome.table.columns());
            for row in outcome.table.rows().iter().take(limit) {
                table.add_row(row.cells().iter().map(|cell| cell.to_string()));
            }
            println!("{table}");

            println!("   Not ready:  {}", outcome.not_ready);
            println!("   Incomplete: {}", outcome.incomplete);
            for message in &skipped {
                println!("   ⚠️  {}", message);
            }
        }
    }

    Ok(())
}
