//! sheetio - forward-only row streaming over spreadsheet worksheets
//!
//! A [`RowStream`](sheet::RowStream) wraps the row cursor of a worksheet and
//! hands rows out one at a time, in source order, behind an explicit
//! presence check / fetch / close contract. Failures of the underlying
//! source are passed through as typed errors.
//!
//! # Example - Streaming a CSV file
//!
//! ```no_run
//! use sheetio::sheet::RowStream;
//! use sheetio::sheet::text::TextWorkbook;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let workbook = TextWorkbook::open("data.csv")?;
//! let sheet = workbook.worksheet();
//!
//! let mut stream = RowStream::new(&sheet)?;
//! while stream.has_next()? {
//!     let row = stream.next_row()?;
//!     println!("{:?}", row.cells());
//! }
//! stream.close();
//! # Ok(())
//! # }
//! ```

/// Common types and utilities
///
/// Error types and byte-order-mark handling shared by every source.
pub mod common;

/// Worksheet abstraction, row streams and the delimited text source
pub mod sheet;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use sheet::{CellValue, Row, RowStream, StreamError};
