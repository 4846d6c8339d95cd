pub mod asset;
pub mod cell;
pub mod config;
pub mod error;
pub mod inventory;
pub mod ports;
pub mod publish;

// Convenient re-exports to simplify imports elsewhere
pub use asset::{AssetEntry, AssetIndex, AssetKey};
pub use cell::CellValue;
pub use config::{InventorySourceConfig, PublishTargetConfig};
pub use error::DomainError;
pub use inventory::{InventoryRow, InventoryTable};
pub use publish::{PublishOutcome, PublishRow, PublishTable, build_publish_table};
