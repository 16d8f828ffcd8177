//! Decoded tabular data handed over by the spreadsheet decoder.
//!
//! The decoder parses spreadsheet cells into one of four value kinds before
//! the core ever sees them. Decode failures travel as values (`Result` per
//! sheet and per file) so a broken sheet never aborts a batch.

use chrono::NaiveDateTime;

/// A decoded spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// True when the cell carries no usable value.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            CellValue::Number(_) | CellValue::DateTime(_) => false,
        }
    }

    /// Render the cell as a trimmed string, `None` when blank.
    ///
    /// Whole numbers render without a fractional tail so numeric identifier
    /// columns keep their digits intact.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            CellValue::Number(value) => Some(format!("{value}")),
            CellValue::DateTime(value) => Some(value.format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }
}

/// One decoded sheet: a header row plus data rows with positional cells.
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    /// Index of a column by its exact header name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

/// A sheet as produced by the decoder; unreadable sheets carry the reason.
#[derive(Debug, Clone)]
pub struct SourceSheet {
    pub name: String,
    pub table: Result<SheetTable, String>,
}

/// A decoded input file: its sheets, or a file-level failure reason when the
/// bytes could not be recognized as a workbook at all.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    /// Advisories produced while decoding (e.g. misleading file extension).
    pub notes: Vec<String>,
    pub load: Result<Vec<SourceSheet>, String>,
}
