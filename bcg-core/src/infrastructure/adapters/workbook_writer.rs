// bcg-core/src/infrastructure/adapters/workbook_writer.rs

use rust_xlsxwriter::{Format, FormatBorder, Workbook, Worksheet};
use tracing::{info, instrument};

use crate::domain::cell::CellValue;
use crate::domain::config::PublishTargetConfig;
use crate::domain::publish::PublishTable;
use crate::error::BcgError;
use crate::infrastructure::error::SinkWriteError;
use crate::infrastructure::fs::atomic_write;
use crate::ports::publish::PublishSink;

/// Writes publish tables as a single-sheet xlsx workbook.
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxPublishSink;

impl PublishSink for XlsxPublishSink {
    #[instrument(skip(self, config, table), fields(path = ?config.workbook, rows = table.len()))]
    fn write(&self, config: &PublishTargetConfig, table: &PublishTable) -> Result<(), BcgError> {
        let bytes = render_workbook(&config.worksheet, table)?;

        atomic_write(&config.workbook, &bytes).map_err(|source| SinkWriteError::Io {
            path: config.workbook.clone(),
            source,
        })?;

        info!(bytes = bytes.len(), "Publish workbook written");
        Ok(())
    }
}

/// Serialises the table in memory: bold header row, then one row per
/// entry. There is no index column.
pub fn render_workbook(sheet_name: &str, table: &PublishTable) -> Result<Vec<u8>, SinkWriteError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold().set_border(FormatBorder::Thin);

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(sheet_name)?;

        for (col, name) in table.columns().iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, name, &header_format)?;
        }

        for (index, row) in table.rows().iter().enumerate() {
            let row_num = index as u32 + 1;
            for (col, cell) in row.cells().iter().enumerate() {
                write_cell(sheet, row_num, col as u16, cell)?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
) -> Result<(), SinkWriteError> {
    match cell {
        CellValue::Empty => {}
        CellValue::Text(s) => {
            sheet.write_string(row, col, s.as_str())?;
        }
        CellValue::Number(n) => {
            sheet.write_number(row, col, *n)?;
        }
        CellValue::Bool(b) => {
            sheet.write_boolean(row, col, *b)?;
        }
    }
    Ok(())
}
