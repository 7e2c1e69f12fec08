//! Common types for spreadsheet operations.

/// Result type for sheet operations.
pub type Result<T> = std::result::Result<T, crate::common::Error>;

/// Types of data that can be stored in a cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell
    Empty,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// String value
    String(String),
    /// Date/time value (stored as serial number)
    DateTime(f64),
    /// Error value
    Error(String),
}

static EMPTY: CellValue = CellValue::Empty;

/// One record produced by a worksheet's row cursor.
///
/// The row carries its physical, 1-based row number in the source so that
/// skipped lines (comments, headers) stay visible to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    number: u32,
    cells: Vec<CellValue>,
}

impl Row {
    /// Create a row from its 1-based number and cell values.
    pub fn new(number: u32, cells: Vec<CellValue>) -> Self {
        Row { number, cells }
    }

    /// Get the row number (1-based).
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Get the cell values in column order.
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Number of cells present in this row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a cell value by column (1-based). Columns past the end are empty.
    pub fn get(&self, column: u32) -> &CellValue {
        if column == 0 {
            return &EMPTY;
        }
        self.cells.get((column - 1) as usize).unwrap_or(&EMPTY)
    }

    /// Get the coordinate (e.g., "C7") of a column in this row.
    pub fn coordinate(&self, column: u32) -> String {
        // 1=A, 2=B, ..., 26=Z, 27=AA
        let mut col_str = String::new();
        let mut col = column;

        while col > 0 {
            col -= 1;
            let c = (b'A' + (col % 26) as u8) as char;
            col_str.insert(0, c);
            col /= 26;
        }

        format!("{}{}", col_str, self.number)
    }

    /// Consume the row, returning its cell values.
    pub fn into_cells(self) -> Vec<CellValue> {
        self.cells
    }
}
