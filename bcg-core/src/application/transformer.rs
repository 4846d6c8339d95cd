// bcg-core/src/application/transformer.rs

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, instrument};

use crate::domain::asset::AssetIndex;
use crate::domain::config::{InventorySourceConfig, PublishTargetConfig};
use crate::domain::inventory::InventoryTable;
use crate::domain::ports::DiagnosticsSink;
use crate::domain::publish::{PublishOutcome, PublishTable, build_publish_table};
use crate::error::BcgError;
use crate::ports::{InventorySource, PublishSink};

/// Counters for one completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub rows_read: usize,
    pub assets_indexed: usize,
    pub duplicate_keys: usize,
    pub not_ready: usize,
    pub incomplete: usize,
    pub published: usize,
    pub output: PathBuf,
}

/// Turns an inventory worksheet into a BCG publish workbook.
///
/// Stages run strictly in order, once: load, index, filter/map, write.
/// Adapters are injected so the pipeline can run against in-memory tables.
pub struct RepositoryTransformer<'a> {
    inventory: InventorySourceConfig,
    target: PublishTargetConfig,
    source: &'a dyn InventorySource,
    sink: &'a dyn PublishSink,
    diagnostics: &'a dyn DiagnosticsSink,
}

impl<'a> RepositoryTransformer<'a> {
    pub fn new(
        inventory: InventorySourceConfig,
        target: PublishTargetConfig,
        source: &'a dyn InventorySource,
        sink: &'a dyn PublishSink,
        diagnostics: &'a dyn DiagnosticsSink,
    ) -> Self {
        Self {
            inventory,
            target,
            source,
            sink,
            diagnostics,
        }
    }

    pub fn inventory_config(&self) -> &InventorySourceConfig {
        &self.inventory
    }

    pub fn target_config(&self) -> &PublishTargetConfig {
        &self.target
    }

    #[instrument(skip(self), fields(path = ?self.inventory.location))]
    pub fn load_inventory_table(&self) -> Result<InventoryTable, BcgError> {
        info!("Loading inventory data started...");
        let table = self.source.load(&self.inventory)?;
        info!(rows = table.len(), "Loading inventory data finished.");
        Ok(table)
    }

    pub fn build_asset_index(&self, table: &InventoryTable) -> Result<AssetIndex, BcgError> {
        info!("Mapping inventory to BCG entries started...");
        let index = AssetIndex::from_inventory(table, &self.inventory)?;
        info!(
            assets = index.len(),
            duplicates = index.overwritten(),
            "Mapping inventory to BCG entries completed"
        );
        Ok(index)
    }

    pub fn build_publish_rows(&self, index: &AssetIndex) -> PublishOutcome {
        info!("Creating BCG entries started...");
        let outcome = build_publish_table(index, &self.inventory, &self.target, self.diagnostics);
        info!(
            published = outcome.table.len(),
            not_ready = outcome.not_ready,
            incomplete = outcome.incomplete,
            "Creating BCG entries completed"
        );
        outcome
    }

    #[instrument(skip(self, table), fields(path = ?self.target.workbook))]
    pub fn write_publish_table(&self, table: &PublishTable) -> Result<(), BcgError> {
        self.sink.write(&self.target, table)
    }

    /// Runs the whole pipeline. Nothing is written if an earlier stage fails.
    pub fn run(&self) -> Result<RunReport, BcgError> {
        let start = Instant::now();
        info!("Generating BCG entries started");

        let table = self.load_inventory_table()?;
        let index = self.build_asset_index(&table)?;
        let outcome = self.build_publish_rows(&index);
        self.write_publish_table(&outcome.table)?;

        info!(elapsed = ?start.elapsed(), "Generating BCG entries finished.");

        Ok(RunReport {
            rows_read: table.len(),
            assets_indexed: index.len(),
            duplicate_keys: index.overwritten(),
            not_ready: outcome.not_ready,
            incomplete: outcome.incomplete,
            published: outcome.table.len(),
            output: self.target.workbook.clone(),
        })
    }
}
