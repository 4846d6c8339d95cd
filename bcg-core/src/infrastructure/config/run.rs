// bcg-core/src/infrastructure/config/run.rs

use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::domain::config::{
    FILE_NAME_COLUMN, InventorySourceConfig, PATH_COLUMN, PublishTargetConfig,
};
use crate::domain::error::DomainError;
use crate::error::BcgError;
use crate::infrastructure::config::logging::LoggingConfig;
use crate::infrastructure::error::InfrastructureError;

pub const INVENTORY_SECTION: &str = "inventory";
pub const TARGET_SECTION: &str = "target_file_config";
pub const LOGGING_SECTION: &str = "logging";

pub const ENV_INVENTORY_LOCATION: &str = "BCG_INVENTORY_LOCATION";
pub const ENV_TARGET_WORKBOOK: &str = "BCG_TARGET_WORKBOOK";

/// Everything one run needs, resolved and validated.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub logging: LoggingConfig,
    pub inventory: InventorySourceConfig,
    pub target: PublishTargetConfig,
}

#[instrument]
pub fn load_run_config(path: &Path) -> Result<RunConfig, BcgError> {
    if !path.is_file() {
        return Err(InfrastructureError::ConfigNotFound(path.display().to_string()).into());
    }
    info!(path = ?path, "Loading run configuration");

    let content = fs::read_to_string(path)?;
    let document: Value =
        serde_yaml::from_str(&content).map_err(InfrastructureError::YamlError)?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    parse_run_config(&document, base_dir, &|key: &str| std::env::var(key).ok())
}

/// Reads only the `logging` section, so a subscriber can be installed before
/// the full load logs anything. Falls back to defaults on any problem; the
/// full load reports it.
pub fn load_logging_config(path: &Path) -> LoggingConfig {
    fs::read_to_string(path)
        .ok()
        .and_then(|content| serde_yaml::from_str::<Value>(&content).ok())
        .and_then(|document| match document.get(LOGGING_SECTION) {
            Some(Value::Null) | None => None,
            Some(value) => serde_yaml::from_value(value.clone()).ok(),
        })
        .unwrap_or_default()
}

/// Builds a [`RunConfig`] from an already parsed document.
///
/// Relative file paths are resolved against `base_dir`; environment
/// overrides (looked up through `env`) win over the file and are used as-is.
pub fn parse_run_config(
    document: &Value,
    base_dir: &Path,
    env: &dyn Fn(&str) -> Option<String>,
) -> Result<RunConfig, BcgError> {
    let logging = match document.get(LOGGING_SECTION) {
        Some(Value::Null) | None => LoggingConfig::default(),
        Some(value) => from_section(value, LOGGING_SECTION)?,
    };

    let mut inventory: InventorySourceConfig = section(document, INVENTORY_SECTION)?;
    let mut target: PublishTargetConfig = section(document, TARGET_SECTION)?;

    inventory.location = resolve(base_dir, &inventory.location);
    target.workbook = resolve(base_dir, &target.workbook);

    apply_env_overrides(&mut inventory, &mut target, env);

    inventory
        .validate()
        .map_err(|e| invalid(INVENTORY_SECTION, e))?;
    target.validate().map_err(|e| invalid(TARGET_SECTION, e))?;

    warn_on_key_column_settings(&inventory);

    Ok(RunConfig {
        logging,
        inventory,
        target,
    })
}

fn section<T: DeserializeOwned>(document: &Value, key: &str) -> Result<T, DomainError> {
    let value = document
        .get(key)
        .ok_or_else(|| DomainError::ConfigValidation(format!("missing section '{}'", key)))?;
    from_section(value, key)
}

fn from_section<T: DeserializeOwned>(value: &Value, key: &str) -> Result<T, DomainError> {
    serde_yaml::from_value(value.clone()).map_err(|e| invalid(key, e))
}

fn invalid(key: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::ConfigValidation(format!("section '{}': {}", key, err))
}

// Empty paths are left for validation to reject.
fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || path.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

fn apply_env_overrides(
    inventory: &mut InventorySourceConfig,
    target: &mut PublishTargetConfig,
    env: &dyn Fn(&str) -> Option<String>,
) {
    if let Some(val) = env(ENV_INVENTORY_LOCATION) {
        info!(old = ?inventory.location, new = ?val, "Overriding inventory location via ENV");
        inventory.location = PathBuf::from(val);
    }
    if let Some(val) = env(ENV_TARGET_WORKBOOK) {
        info!(old = ?target.workbook, new = ?val, "Overriding target workbook via ENV");
        target.workbook = PathBuf::from(val);
    }
}

fn warn_on_key_column_settings(inventory: &InventorySourceConfig) {
    let settings = [
        ("inv_file_path", &inventory.file_path_column, PATH_COLUMN),
        ("inv_file_name", &inventory.file_name_column, FILE_NAME_COLUMN),
    ];
    for (key, configured, fixed) in settings {
        if let Some(configured) = configured
            && configured != fixed
        {
            warn!(
                setting = key,
                configured = %configured,
                used = fixed,
                "Asset keys are always built from the fixed key column, ignoring setting"
            );
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::config::logging::LogFormat;
    use anyhow::Result;
    use std::collections::HashMap;
    use tempfile::tempdir;

    const CONFIG: &str = r#"
logging:
  level: debug
inventory:
  inventory_meta_location: input/inventory.xlsx
  inventory_worksheet_name: Inventory
  inventory_sheet_columns: [Path, File_name, Layer, Namespace, Item, Schema, Object, Ready]
  inv_file_path: Path
  inv_file_name: File_name
  inv_udh_layer: Layer
  inv_namespace: Namespace
  inv_item: Item
  inv_snowflake_table_schema: Schema
  inv_snowflake_object_name: Object
  inv_ready_to_snowflake_publish: Ready
target_file_config:
  target_workbook_file: /tmp/out/bcg.xlsx
  target_worksheet_name: BCG
  target_sheet_columns: [LAYER, NAMESPACE, DATA_ITEM, PUBLISH_TYPE, PUBLISH_TARGET_CONNECTION, PUBLISH_TARGET_OBJECT, PUBLISH_CUSTOM_MODE, PUBLISH_MODE]
  publish_type: SNOWFLAKE
  publish_target_connection: sf_conn
  publish_custome_mode: N
  publish_mode: OVERWRITE
"#;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn parse(yaml: &str) -> Result<RunConfig, BcgError> {
        let document: Value = serde_yaml::from_str(yaml).unwrap();
        parse_run_config(&document, Path::new("/configs"), &no_env)
    }

    fn config_error(err: BcgError) -> String {
        match err {
            BcgError::Domain(DomainError::ConfigValidation(msg)) => msg,
            other => panic!("expected a config validation error, got {other}"),
        }
    }

    #[test]
    fn test_full_document() -> Result<()> {
        let config = parse(CONFIG)?;
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.inventory.ready_column, "Ready");
        assert_eq!(config.target.publish_custom_mode, "N");
        assert_eq!(config.target.columns.len(), 8);
        Ok(())
    }

    #[test]
    fn test_relative_paths_resolve_against_config_dir() -> Result<()> {
        let config = parse(CONFIG)?;
        assert_eq!(
            config.inventory.location,
            PathBuf::from("/configs/input/inventory.xlsx")
        );
        assert_eq!(config.target.workbook, PathBuf::from("/tmp/out/bcg.xlsx"));
        Ok(())
    }

    #[test]
    fn test_missing_section() {
        let yaml = CONFIG.split("target_file_config:").next().unwrap();
        let msg = config_error(parse(yaml).unwrap_err());
        assert!(msg.contains("missing section 'target_file_config'"), "{msg}");
    }

    #[test]
    fn test_missing_field() {
        let yaml = CONFIG.replace("  inv_item: Item\n", "");
        let msg = config_error(parse(&yaml).unwrap_err());
        assert!(msg.contains("section 'inventory'"), "{msg}");
        assert!(msg.contains("inv_item"), "{msg}");
    }

    #[test]
    fn test_validation_runs_after_parsing() {
        let yaml = CONFIG.replace(
            "inv_snowflake_object_name: Object",
            "inv_snowflake_object_name: Nope",
        );
        let msg = config_error(parse(&yaml).unwrap_err());
        assert!(msg.contains("'Nope'"), "{msg}");
    }

    #[test]
    fn test_empty_location_is_a_config_error() {
        let yaml = CONFIG.replace(
            "inventory_meta_location: input/inventory.xlsx",
            "inventory_meta_location: \"\"",
        );
        let msg = config_error(parse(&yaml).unwrap_err());
        assert!(msg.contains("section 'inventory'"), "{msg}");
        assert!(msg.contains("file path cannot be empty"), "{msg}");
    }

    #[test]
    fn test_logging_section_is_optional() -> Result<()> {
        let yaml = CONFIG.replace("logging:\n  level: debug\n", "");
        assert_eq!(parse(&yaml)?.logging, LoggingConfig::default());
        Ok(())
    }

    #[test]
    fn test_env_overrides() -> Result<()> {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_INVENTORY_LOCATION, "elsewhere/inv.xlsx"),
            (ENV_TARGET_WORKBOOK, "/srv/bcg.xlsx"),
        ]);
        let document: Value = serde_yaml::from_str(CONFIG)?;
        let lookup = |key: &str| vars.get(key).map(|v| v.to_string());

        let config = parse_run_config(&document, Path::new("/configs"), &lookup)?;

        assert_eq!(config.inventory.location, PathBuf::from("elsewhere/inv.xlsx"));
        assert_eq!(config.target.workbook, PathBuf::from("/srv/bcg.xlsx"));
        Ok(())
    }

    #[test]
    fn test_load_from_disk() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("bcg.yaml");
        fs::write(&path, CONFIG)?;

        let config = load_run_config(&path)?;
        assert_eq!(config.inventory.location, dir.path().join("input/inventory.xlsx"));
        Ok(())
    }

    #[test]
    fn test_logging_section_read_alone() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("bcg.yaml");
        // Broken elsewhere in the document; the logging section still reads
        fs::write(&path, "logging:\n  level: warn\n  format: json\ninventory: 3\n")?;

        let logging = load_logging_config(&path);
        assert_eq!(logging.level, "warn");
        assert_eq!(logging.format, LogFormat::Json);

        assert_eq!(
            load_logging_config(Path::new("/nope/bcg.yaml")),
            LoggingConfig::default()
        );
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let err = load_run_config(Path::new("/nope/bcg.yaml")).unwrap_err();
        assert!(matches!(
            err,
            BcgError::Infrastructure(InfrastructureError::ConfigNotFound(_))
        ));
    }

    #[test]
    fn test_broken_yaml() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("bcg.yaml");
        fs::write(&path, "inventory: [unclosed")?;
        let err = load_run_config(&path).unwrap_err();
        assert!(matches!(
            err,
            BcgError::Infrastructure(InfrastructureError::YamlError(_))
        ));
        Ok(())
    }
}
