//! Worksheet row streaming.
//!
//! This module defines the tabular source abstraction (`Worksheet`,
//! `RowIterator`, `WorkbookTrait`), the `RowStream` cursor built on top of
//! it, and a delimited text source implementing the traits.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sheetio::sheet::{RowStream, WorkbookTrait};
//! use sheetio::sheet::text::TextWorkbook;
//!
//! let workbook = TextWorkbook::open("data.csv")?;
//! let sheet = workbook.worksheet_by_name("Sheet1")?;
//!
//! let mut rows = RowStream::new(&sheet)?;
//! while rows.has_next()? {
//!     let row = rows.next_row()?;
//!     println!("row {}: {} cells", row.number(), row.len());
//! }
//! rows.close();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Submodule declarations
pub mod stream;
pub mod text;
pub mod traits;
pub mod types;

// Re-exports
pub use stream::{RowStream, StreamError};
pub use traits::{RowIterator, WorkbookTrait, Worksheet};
pub use types::{CellValue, Result, Row};
