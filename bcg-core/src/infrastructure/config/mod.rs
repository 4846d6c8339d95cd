pub mod logging;
pub mod run;

pub use crate::domain::config::{InventorySourceConfig, PublishTargetConfig};
pub use logging::{LogFormat, LoggingConfig};
pub use run::{RunConfig, load_logging_config, load_run_config};
