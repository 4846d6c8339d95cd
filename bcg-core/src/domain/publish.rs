// bcg-core/src/domain/publish.rs

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::asset::{AssetEntry, AssetIndex, AssetKey};
use crate::domain::cell::CellValue;
use crate::domain::config::{InventorySourceConfig, PUBLISH_ROW_WIDTH, PublishTargetConfig};
use crate::domain::ports::{DiagnosticsSink, PublishDiagnostic};

/// One BCG entry, in output column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishRow {
    pub layer: CellValue,
    pub namespace: CellValue,
    pub data_item: CellValue,
    pub publish_type: String,
    pub publish_connection: String,
    pub publish_target_object: String,
    pub publish_custom_mode: String,
    pub publish_mode: String,
}

impl PublishRow {
    pub fn new(entry: &AssetEntry, target_object: String, target: &PublishTargetConfig) -> Self {
        Self {
            layer: entry.layer.clone(),
            namespace: entry.namespace.clone(),
            data_item: entry.data_item.clone(),
            publish_type: target.publish_type.clone(),
            publish_connection: target.publish_connection.clone(),
            publish_target_object: target_object,
            publish_custom_mode: target.publish_custom_mode.clone(),
            publish_mode: target.publish_mode.clone(),
        }
    }

    pub fn cells(&self) -> [CellValue; PUBLISH_ROW_WIDTH] {
        [
            self.layer.clone(),
            self.namespace.clone(),
            self.data_item.clone(),
            CellValue::Text(self.publish_type.clone()),
            CellValue::Text(self.publish_connection.clone()),
            CellValue::Text(self.publish_target_object.clone()),
            CellValue::Text(self.publish_custom_mode.clone()),
            CellValue::Text(self.publish_mode.clone()),
        ]
    }
}

/// Header plus rows, ready to hand to a sink.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishTable {
    columns: Vec<String>,
    rows: Vec<PublishRow>,
}

impl PublishTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: PublishRow) {
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[PublishRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows as JSON objects keyed by the output header.
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.cells().into_iter().map(cell_to_json))
                    .collect()
            })
            .collect()
    }
}

fn cell_to_json(cell: CellValue) -> Value {
    serde_json::to_value(cell).unwrap_or(Value::Null)
}

/// Result of filtering the asset index.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishOutcome {
    pub table: PublishTable,
    /// Entries whose readiness flag is not exactly 1.0.
    pub not_ready: usize,
    /// Ready entries skipped for missing schema/table.
    pub incomplete: usize,
}

/// Filters the index down to publishable entries.
///
/// An entry is emitted iff it is ready and both schema and table are present.
/// Ready-but-incomplete entries are reported to `diagnostics`, in index order.
pub fn build_publish_table(
    index: &AssetIndex,
    inventory: &InventorySourceConfig,
    target: &PublishTargetConfig,
    diagnostics: &dyn DiagnosticsSink,
) -> PublishOutcome {
    let mut outcome = PublishOutcome {
        table: PublishTable::new(target.columns.clone()),
        not_ready: 0,
        incomplete: 0,
    };

    for (key, entry) in index.iter() {
        if !entry.is_ready() {
            outcome.not_ready += 1;
            continue;
        }

        match entry.publish_target_object() {
            Some(target_object) => {
                outcome.table.push(PublishRow::new(entry, target_object, target));
            }
            None => {
                outcome.incomplete += 1;
                diagnostics.report(incomplete_target(key, entry, inventory));
            }
        }
    }

    outcome
}

fn incomplete_target(
    key: &AssetKey,
    entry: &AssetEntry,
    inventory: &InventorySourceConfig,
) -> PublishDiagnostic {
    PublishDiagnostic::IncompleteTarget {
        key: key.clone(),
        schema_column: inventory.schema_column.clone(),
        table_column: inventory.table_column.clone(),
        missing_schema: entry.publish_schema.is_none(),
        missing_table: entry.publish_table.is_none(),
    }
}
