// bcg/src/commands/mod.rs

pub mod preview;
pub mod run;
pub mod validate;

use std::path::Path;

use bcg_core::infrastructure::config::{RunConfig, load_logging_config, load_run_config};
use miette::Report;

use crate::logging;

/// Installs logging from the config's `logging` section, then loads the
/// whole configuration so its warnings reach the subscriber.
pub fn load_config(path: &Path) -> miette::Result<RunConfig> {
    logging::init(&load_logging_config(path))?;

    load_run_config(path).map_err(|e| {
        Report::new(e).wrap_err(format!("Invalid configuration: {}", path.display()))
    })
}
