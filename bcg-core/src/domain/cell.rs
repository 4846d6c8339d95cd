// bcg-core/src/domain/cell.rs

use serde::Serialize;
use std::fmt;

/// Text markers the inventory tooling writes for "no value".
/// They are folded into [`CellValue::Empty`] when a sheet is loaded.
pub const NA_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A single spreadsheet cell after loading.
///
/// Missing values are a first-class state: anything that reads as "no value"
/// (blank cell, error cell, NaN, NA marker text) is `Empty`.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Builds a text cell, folding NA markers into `Empty`.
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if NA_MARKERS.contains(&value.as_str()) {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }

    /// Builds a numeric cell; NaN becomes `Empty`.
    pub fn number(value: f64) -> Self {
        if value.is_nan() {
            Self::Empty
        } else {
            Self::Number(value)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Exact numeric equality. Text and booleans never match.
    pub fn is_number(&self, expected: f64) -> bool {
        matches!(self, Self::Number(n) if *n == expected)
    }

    /// Text form of a present value, `None` when the cell is empty.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Bool(b) => write!(f, "{}", b),
            // Identifiers typed as numbers in Excel should not grow a ".0"
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
