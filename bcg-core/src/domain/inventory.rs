// bcg-core/src/domain/inventory.rs

use crate::domain::cell::CellValue;
use crate::domain::error::DomainError;

/// The inventory worksheet projected to the configured columns.
///
/// Rows keep file order. Every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryTable {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl InventoryTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding short rows with `Empty` and dropping overflow.
    pub fn push_row(&mut self, mut cells: Vec<CellValue>) {
        cells.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(cells);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = InventoryRow<'_>> {
        self.rows.iter().enumerate().map(move |(index, cells)| InventoryRow {
            index,
            columns: &self.columns,
            cells,
        })
    }
}

/// Borrowed view of one inventory row.
#[derive(Debug, Clone, Copy)]
pub struct InventoryRow<'a> {
    index: usize,
    columns: &'a [String],
    cells: &'a [CellValue],
}

impl<'a> InventoryRow<'a> {
    /// Zero-based position among the data rows (header excluded).
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, column: &str) -> Result<&'a CellValue, DomainError> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| &self.cells[i])
            .ok_or_else(|| DomainError::UnknownColumn(column.to_string()))
    }
}
