// bcg-core/src/ports/publish.rs

use crate::domain::config::PublishTargetConfig;
use crate::domain::publish::PublishTable;
use crate::error::BcgError;

pub trait PublishSink: Send + Sync {
    /// Persists the table (header + rows, no index column) at the configured
    /// destination. `Ok` means the bytes reached the destination.
    fn write(&self, config: &PublishTargetConfig, table: &PublishTable) -> Result<(), BcgError>;
}
