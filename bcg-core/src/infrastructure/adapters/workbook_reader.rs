// bcg-core/src/infrastructure/adapters/workbook_reader.rs

use calamine::{Data, Range, Reader, open_workbook_auto};
use tracing::{debug, instrument};

use crate::domain::cell::CellValue;
use crate::domain::config::InventorySourceConfig;
use crate::domain::inventory::InventoryTable;
use crate::error::BcgError;
use crate::infrastructure::error::SourceLoadError;
use crate::ports::inventory::InventorySource;

/// Reads inventories from xlsx/xlsm/xlsb/xls/ods workbooks.
///
/// The first row of the worksheet's used range is the header. Rows where
/// every cell is empty are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct CalamineInventorySource;

impl InventorySource for CalamineInventorySource {
    #[instrument(skip(self, config), fields(path = ?config.location, sheet = %config.worksheet))]
    fn load(&self, config: &InventorySourceConfig) -> Result<InventoryTable, BcgError> {
        let mut workbook =
            open_workbook_auto(&config.location).map_err(|source| SourceLoadError::Workbook {
                path: config.location.clone(),
                source,
            })?;

        let available = workbook.sheet_names();
        if !available.iter().any(|name| name == &config.worksheet) {
            return Err(SourceLoadError::WorksheetNotFound {
                path: config.location.clone(),
                sheet: config.worksheet.clone(),
                available,
            }
            .into());
        }

        let range = workbook
            .worksheet_range(&config.worksheet)
            .map_err(|source| SourceLoadError::Workbook {
                path: config.location.clone(),
                source,
            })?;

        Ok(project(&range, config)?)
    }
}

/// Projects a worksheet range onto the configured columns.
fn project(
    range: &Range<Data>,
    config: &InventorySourceConfig,
) -> Result<InventoryTable, SourceLoadError> {
    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|cells| cells.iter().map(|c| c.to_string()).collect())
        .unwrap_or_default();

    let mut positions = Vec::with_capacity(config.columns.len());
    let mut missing = Vec::new();
    for column in &config.columns {
        match header.iter().position(|h| h == column) {
            Some(i) => positions.push(i),
            None => missing.push(column.clone()),
        }
    }
    if !missing.is_empty() {
        return Err(SourceLoadError::MissingColumns {
            sheet: config.worksheet.clone(),
            missing,
        });
    }

    let mut table = InventoryTable::new(config.columns.clone());
    let mut blank = 0usize;
    for cells in rows {
        if cells.iter().all(|c| to_cell(c).is_empty()) {
            blank += 1;
            continue;
        }
        table.push_row(
            positions
                .iter()
                .map(|&i| cells.get(i).map(to_cell).unwrap_or_default())
                .collect(),
        );
    }
    debug!(rows = table.len(), blank, "Inventory worksheet projected");

    Ok(table)
}

fn to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::text(s.as_str()),
        Data::Float(f) => CellValue::number(*f),
        Data::Int(i) => CellValue::number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        other => CellValue::text(other.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::config::fixtures::inventory_config;
    use crate::infrastructure::error::InfrastructureError;
    use anyhow::Result;
    use rust_xlsxwriter::Workbook;
    use std::path::Path;
    use tempfile::tempdir;

    /// Writes a workbook with one "Inventory" sheet; `None` leaves a blank cell.
    fn write_fixture(path: &Path, header: &[&str], rows: &[Vec<Option<CellValue>>]) -> Result<()> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Inventory")?;
        for (c, name) in header.iter().enumerate() {
            sheet.write_string(0, c as u16, *name)?;
        }
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32 + 1, c as u16);
                match cell {
                    Some(CellValue::Text(s)) => sheet.write_string(r, c, s.as_str())?,
                    Some(CellValue::Number(n)) => sheet.write_number(r, c, *n)?,
                    Some(CellValue::Bool(b)) => sheet.write_boolean(r, c, *b)?,
                    Some(CellValue::Empty) | None => continue,
                };
            }
        }
        workbook.save(path)?;
        Ok(())
    }

    fn text(s: &str) -> Option<CellValue> {
        Some(CellValue::Text(s.into()))
    }

    #[test]
    fn test_projects_configured_columns_in_order() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("inventory.xlsx");
        // Source has an extra column and a different order
        write_fixture(
            &path,
            &[
                "Ready", "Extra", "Path", "File_name", "Layer", "Namespace", "Item", "Schema",
                "Object",
            ],
            &[
                vec![
                    Some(CellValue::Number(1.0)),
                    text("ignored"),
                    text("data"),
                    text("a.csv"),
                    text("RAW"),
                    text("sales"),
                    text("orders"),
                    text("S"),
                    text("nan"),
                ],
                vec![None; 9],
                vec![
                    Some(CellValue::Bool(true)),
                    None,
                    text("data"),
                    Some(CellValue::Number(7.0)),
                    None,
                    None,
                    None,
                    None,
                    None,
                ],
            ],
        )?;

        let mut config = inventory_config();
        config.location = path;
        let table = CalamineInventorySource.load(&config)?;

        assert_eq!(table.columns(), config.columns.as_slice());
        assert_eq!(table.len(), 2);

        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows[0].get("Path")?, &CellValue::Text("data".into()));
        assert_eq!(rows[0].get("Ready")?, &CellValue::Number(1.0));
        assert_eq!(rows[0].get("Object")?, &CellValue::Empty);
        assert_eq!(rows[1].get("File_name")?, &CellValue::Number(7.0));
        assert_eq!(rows[1].get("Ready")?, &CellValue::Bool(true));
        assert_eq!(rows[1].get("Layer")?, &CellValue::Empty);
        Ok(())
    }

    #[test]
    fn test_missing_columns_are_reported() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("inventory.xlsx");
        write_fixture(&path, &["Path", "File_name", "Layer"], &[])?;

        let mut config = inventory_config();
        config.location = path;
        let err = CalamineInventorySource.load(&config).unwrap_err();

        match err {
            BcgError::Infrastructure(InfrastructureError::SourceLoad(
                SourceLoadError::MissingColumns { missing, .. },
            )) => assert_eq!(missing, ["Namespace", "Item", "Schema", "Object", "Ready"]),
            other => panic!("unexpected error: {other}"),
        }
        Ok(())
    }

    #[test]
    fn test_missing_worksheet() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("inventory.xlsx");
        write_fixture(&path, &["Path"], &[])?;

        let mut config = inventory_config();
        config.location = path;
        config.worksheet = "Nope".into();
        let err = CalamineInventorySource.load(&config).unwrap_err();

        assert!(matches!(
            err,
            BcgError::Infrastructure(InfrastructureError::SourceLoad(
                SourceLoadError::WorksheetNotFound { ref available, .. }
            )) if available == &["Inventory".to_string()]
        ));
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let mut config = inventory_config();
        config.location = "/definitely/not/here.xlsx".into();
        let err = CalamineInventorySource.load(&config).unwrap_err();
        assert!(matches!(
            err,
            BcgError::Infrastructure(InfrastructureError::SourceLoad(
                SourceLoadError::Workbook { .. }
            ))
        ));
    }
}
