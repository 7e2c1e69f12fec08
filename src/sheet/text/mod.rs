//! Text-based spreadsheet format support (CSV, TSV, etc.)
//!
//! This module provides a tabular source over delimited text formats like
//! CSV, TSV and PRN files. It implements the unified sheet API with
//! configurable delimiters and lazy, per-row parsing.
//!
//! # Features
//!
//! - **Configurable delimiters**: CSV (comma), TSV (tab), PRN (semicolon), pipe or custom
//! - **Lazy parsing**: rows are decoded only when a cursor reaches them
//! - **Quote handling**: quoted fields with doubled quotes and backslash escapes
//! - **Shared buffers**: every cursor reads the same document bytes
//!
//! # Example
//!
//! ```rust,no_run
//! use sheetio::sheet::{RowStream, WorkbookTrait};
//! use sheetio::sheet::text::{TextConfig, TextWorkbook};
//!
//! // Open a TSV file with a header row
//! let config = TextConfig::tsv().with_headers(true);
//! let workbook = TextWorkbook::from_path_with_config("data.tsv", config)?;
//! let worksheet = workbook.worksheet();
//!
//! for row in RowStream::new(&worksheet)? {
//!     let row = row?;
//!     println!("{:?}", row.cells());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod iterators;
pub mod parser;
pub mod workbook;
pub mod worksheet;

pub use parser::TextParser;
pub use workbook::{TextConfig, TextWorkbook};
pub use worksheet::TextWorksheet;
