// bcg-core/src/domain/config.rs

use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use validator::{Validate, ValidationError};

/// Column holding the directory part of the asset key. Not configurable.
pub const PATH_COLUMN: &str = "Path";
/// Column holding the file part of the asset key. Not configurable.
pub const FILE_NAME_COLUMN: &str = "File_name";
/// A publish row always carries these many fields.
pub const PUBLISH_ROW_WIDTH: usize = 8;

/// Where the inventory lives and which of its columns play which role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_role_columns"))]
pub struct InventorySourceConfig {
    #[serde(rename = "inventory_meta_location")]
    #[validate(custom(function = "non_empty_path"))]
    pub location: PathBuf,

    #[serde(rename = "inventory_worksheet_name")]
    #[validate(length(min = 1, message = "worksheet name cannot be empty"))]
    pub worksheet: String,

    #[serde(rename = "inventory_sheet_columns")]
    #[validate(length(min = 1, message = "at least one column must be retained"))]
    pub columns: Vec<String>,

    /// Informational only: the key is always built from `Path` and `File_name`.
    #[serde(rename = "inv_file_path", default, skip_serializing_if = "Option::is_none")]
    pub file_path_column: Option<String>,

    /// Informational only, see `file_path_column`.
    #[serde(rename = "inv_file_name", default, skip_serializing_if = "Option::is_none")]
    pub file_name_column: Option<String>,

    #[serde(rename = "inv_udh_layer")]
    pub layer_column: String,

    #[serde(rename = "inv_namespace")]
    pub namespace_column: String,

    #[serde(rename = "inv_item")]
    pub data_item_column: String,

    #[serde(rename = "inv_snowflake_table_schema")]
    pub schema_column: String,

    #[serde(rename = "inv_snowflake_object_name")]
    pub table_column: String,

    #[serde(rename = "inv_ready_to_snowflake_publish")]
    pub ready_column: String,
}

impl InventorySourceConfig {
    /// Role columns in (label, column) pairs, key columns first.
    pub fn referenced_columns(&self) -> [(&'static str, &str); 8] {
        [
            ("asset path", PATH_COLUMN),
            ("asset file name", FILE_NAME_COLUMN),
            ("inv_udh_layer", &self.layer_column),
            ("inv_namespace", &self.namespace_column),
            ("inv_item", &self.data_item_column),
            ("inv_snowflake_table_schema", &self.schema_column),
            ("inv_snowflake_object_name", &self.table_column),
            ("inv_ready_to_snowflake_publish", &self.ready_column),
        ]
    }
}

fn validate_role_columns(config: &InventorySourceConfig) -> Result<(), ValidationError> {
    let missing: Vec<String> = config
        .referenced_columns()
        .iter()
        .filter(|(_, column)| !config.columns.iter().any(|c| c == column))
        .map(|(label, column)| format!("{} ('{}')", label, column))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(ValidationError::new("unretained_column").with_message(Cow::Owned(format!(
        "referenced columns are not in inventory_sheet_columns: {}",
        missing.join(", ")
    ))))
}

fn non_empty_path(path: &Path) -> Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::new("empty_path")
            .with_message(Cow::Borrowed("file path cannot be empty")));
    }
    Ok(())
}

/// Where publish entries are written and the constants stamped on each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PublishTargetConfig {
    #[serde(rename = "target_workbook_file")]
    #[validate(custom(function = "non_empty_path"))]
    pub workbook: PathBuf,

    // Excel refuses sheet names longer than 31 characters
    #[serde(rename = "target_worksheet_name")]
    #[validate(length(min = 1, max = 31, message = "worksheet name must be 1-31 characters"))]
    pub worksheet: String,

    #[serde(rename = "target_sheet_columns")]
    #[validate(length(equal = 8, message = "exactly 8 output columns are required"))]
    pub columns: Vec<String>,

    #[serde(deserialize_with = "scalar_string")]
    pub publish_type: String,

    #[serde(rename = "publish_target_connection", deserialize_with = "scalar_string")]
    pub publish_connection: String,

    #[serde(alias = "publish_custome_mode", deserialize_with = "scalar_string")]
    pub publish_custom_mode: String,

    #[serde(deserialize_with = "scalar_string")]
    pub publish_mode: String,
}

/// Accepts any YAML scalar and keeps its text form (`mode: 1` reads as "1").
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected a scalar value, found {:?}",
            other
        ))),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn inventory_config() -> InventorySourceConfig {
        InventorySourceConfig {
            location: PathBuf::from("inventory.xlsx"),
            worksheet: "Inventory".into(),
            columns: [
                "Path", "File_name", "Layer", "Namespace", "Item", "Schema", "Object", "Ready",
            ]
            .map(String::from)
            .to_vec(),
            file_path_column: None,
            file_name_column: None,
            layer_column: "Layer".into(),
            namespace_column: "Namespace".into(),
            data_item_column: "Item".into(),
            schema_column: "Schema".into(),
            table_column: "Object".into(),
            ready_column: "Ready".into(),
        }
    }

    pub fn target_config() -> PublishTargetConfig {
        PublishTargetConfig {
            workbook: PathBuf::from("bcg.xlsx"),
            worksheet: "BCG".into(),
            columns: [
                "LAYER",
                "NAMESPACE",
                "DATA_ITEM",
                "PUBLISH_TYPE",
                "PUBLISH_TARGET_CONNECTION",
                "PUBLISH_TARGET_OBJECT",
                "PUBLISH_CUSTOM_MODE",
                "PUBLISH_MODE",
            ]
            .map(String::from)
            .to_vec(),
            publish_type: "SNOWFLAKE".into(),
            publish_connection: "sf_conn".into(),
            publish_custom_mode: "N".into(),
            publish_mode: "OVERWRITE".into(),
        }
    }
}
