//! Traits for spreadsheet abstraction.
//!
//! These are the seams a [`RowStream`](super::RowStream) consumes. Anything
//! that can hand out a row cursor can be streamed.

use super::types::{Result, Row};
use std::fmt::Debug;

/// Cursor over the rows of a worksheet.
///
/// Presence check and fetch are fused into one pull: `None` means the
/// cursor is exhausted, `Some(Err(_))` means the source failed to decode
/// the row at the current position.
pub trait RowIterator<'a> {
    /// Get the next row.
    fn next(&mut self) -> Option<Result<Row>>;
}

/// Represents a worksheet (sheet) in a workbook.
pub trait Worksheet {
    /// Get the worksheet name.
    fn name(&self) -> &str;

    /// Open a new cursor positioned before the first row.
    ///
    /// Fails if the worksheet cannot currently supply rows.
    fn rows(&self) -> Result<Box<dyn RowIterator<'_> + '_>>;
}

/// Trait representing a workbook (spreadsheet document).
pub trait WorkbookTrait: Debug {
    /// Get the active worksheet.
    fn active_worksheet(&self) -> Result<Box<dyn Worksheet + '_>>;

    /// Get all worksheet names.
    fn worksheet_names(&self) -> Vec<String>;

    /// Get a worksheet by name.
    fn worksheet_by_name(&self, name: &str) -> Result<Box<dyn Worksheet + '_>>;

    /// Get a worksheet by index.
    fn worksheet_by_index(&self, index: usize) -> Result<Box<dyn Worksheet + '_>>;

    /// Get the number of worksheets.
    fn worksheet_count(&self) -> usize;

    /// Get the index of the active worksheet.
    fn active_sheet_index(&self) -> usize;
}

impl<W: Worksheet + ?Sized> Worksheet for Box<W> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn rows(&self) -> Result<Box<dyn RowIterator<'_> + '_>> {
        (**self).rows()
    }
}
