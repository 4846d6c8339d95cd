// bcg-core/src/ports/inventory.rs

// What the transformer needs from an inventory, without knowing whether it
// is an xlsx file, an ODS file or a table built in memory.

use crate::domain::config::InventorySourceConfig;
use crate::domain::inventory::InventoryTable;
use crate::error::BcgError;

pub trait InventorySource: Send + Sync {
    /// Loads the configured worksheet projected to `config.columns`, in
    /// configured column order. Fails if the file, worksheet or any
    /// configured column is missing.
    fn load(&self, config: &InventorySourceConfig) -> Result<InventoryTable, BcgError>;
}
