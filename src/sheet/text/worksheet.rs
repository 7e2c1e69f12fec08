//! Worksheet implementation for text-based formats

use bytes::Bytes;

use super::iterators::TextRowIterator;
use super::parser::TextParser;
use super::workbook::TextConfig;
use crate::sheet::{Result as SheetResult, Row, RowIterator, Worksheet};

/// Worksheet implementation for text-based formats.
///
/// Rows are parsed on demand by each cursor; the worksheet itself only
/// holds the shared document bytes.
#[derive(Debug, Clone)]
pub struct TextWorksheet {
    data: Bytes,
    config: TextConfig,
    name: String,
}

impl TextWorksheet {
    /// Create a worksheet over already-decoded document bytes
    pub fn new(data: Bytes, config: TextConfig, name: String) -> Self {
        TextWorksheet { data, config, name }
    }

    /// Get the header row, if the configuration declares one.
    ///
    /// Returns `Ok(None)` when headers are disabled or the sheet is empty.
    pub fn headers(&self) -> SheetResult<Option<Row>> {
        if !self.config.has_headers {
            return Ok(None);
        }
        self.config.validate()?;
        TextParser::new(&self.data, &self.config).parse_row().transpose()
    }

    /// Get the parsing configuration
    pub fn config(&self) -> &TextConfig {
        &self.config
    }
}

impl Worksheet for TextWorksheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn rows(&self) -> SheetResult<Box<dyn RowIterator<'_> + '_>> {
        self.config.validate()?;

        let mut parser = TextParser::new(&self.data, &self.config);
        if self.config.has_headers
            && let Some(Err(err)) = parser.parse_row()
        {
            return Err(err);
        }

        Ok(Box::new(TextRowIterator::new(parser)))
    }
}
