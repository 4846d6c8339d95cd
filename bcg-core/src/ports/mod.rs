// bcg-core/src/ports/mod.rs

pub mod inventory;
pub mod publish;

pub use inventory::InventorySource;
pub use publish::PublishSink;
