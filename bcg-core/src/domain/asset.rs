// bcg-core/src/domain/asset.rs

use indexmap::IndexMap;
use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;
use tracing::debug;

use crate::domain::cell::CellValue;
use crate::domain::config::{FILE_NAME_COLUMN, InventorySourceConfig, PATH_COLUMN};
use crate::domain::error::DomainError;
use crate::domain::inventory::{InventoryRow, InventoryTable};

/// Value a readiness cell must hold, exactly, for an asset to be published.
pub const READY_FLAG: f64 = 1.0;

/// `Path/File_name` identifier of an inventory asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AssetKey(String);

impl AssetKey {
    pub fn compose(path: &str, file_name: &str) -> Self {
        Self(format!("{}/{}", path, file_name))
    }

    /// Reads both key columns from a row. Missing parts are fatal.
    pub fn from_row(row: &InventoryRow<'_>) -> Result<Self, DomainError> {
        let part = |column: &str| -> Result<String, DomainError> {
            row.get(column)?
                .as_text()
                .ok_or_else(|| DomainError::IncompleteAssetKey {
                    row: row.index(),
                    column: column.to_string(),
                })
        };
        Ok(Self::compose(&part(PATH_COLUMN)?, &part(FILE_NAME_COLUMN)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for AssetKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// What the inventory says about one asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetEntry {
    pub layer: CellValue,
    pub namespace: CellValue,
    pub data_item: CellValue,
    pub publish_schema: Option<String>,
    pub publish_table: Option<String>,
    pub ready: CellValue,
}

impl AssetEntry {
    pub fn from_row(
        row: &InventoryRow<'_>,
        config: &InventorySourceConfig,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            layer: row.get(&config.layer_column)?.clone(),
            namespace: row.get(&config.namespace_column)?.clone(),
            data_item: row.get(&config.data_item_column)?.clone(),
            publish_schema: row.get(&config.schema_column)?.as_text(),
            publish_table: row.get(&config.table_column)?.as_text(),
            ready: row.get(&config.ready_column)?.clone(),
        })
    }

    pub fn is_ready(&self) -> bool {
        self.ready.is_number(READY_FLAG)
    }

    /// `schema.table`, or `None` while either half is missing.
    pub fn publish_target_object(&self) -> Option<String> {
        match (&self.publish_schema, &self.publish_table) {
            (Some(schema), Some(table)) => Some(format!("{}.{}", schema, table)),
            _ => None,
        }
    }
}

/// Insertion-ordered index of assets.
///
/// Inserting an existing key replaces its entry but keeps the position the
/// key was first seen at: the last row wins, the first row sets the order.
#[derive(Debug, Clone, Default)]
pub struct AssetIndex {
    entries: IndexMap<AssetKey, AssetEntry>,
    overwritten: usize,
}

impl AssetIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_inventory(
        table: &InventoryTable,
        config: &InventorySourceConfig,
    ) -> Result<Self, DomainError> {
        let mut index = Self::new();
        for row in table.rows() {
            let key = AssetKey::from_row(&row)?;
            let entry = AssetEntry::from_row(&row, config)?;
            index.insert(key, entry);
        }
        Ok(index)
    }

    /// Returns the entry that was replaced, if any.
    pub fn insert(&mut self, key: AssetKey, entry: AssetEntry) -> Option<AssetEntry> {
        match self.entries.get_mut(&key) {
            Some(slot) => {
                debug!(asset = %key, "Duplicate asset key, keeping the later row");
                self.overwritten += 1;
                Some(std::mem::replace(slot, entry))
            }
            None => {
                self.entries.insert(key, entry);
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&AssetEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of inserts that replaced an existing entry.
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AssetKey, &AssetEntry)> {
        self.entries.iter()
    }
}
