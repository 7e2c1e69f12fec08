//! Iterator implementations for text-based formats

use super::parser::TextParser;
use crate::sheet::{Result as SheetResult, Row, RowIterator};

/// Iterator over rows in a text worksheet
pub struct TextRowIterator<'a> {
    parser: TextParser<'a>,
}

impl<'a> TextRowIterator<'a> {
    /// Create a new row iterator from a positioned parser
    pub fn new(parser: TextParser<'a>) -> Self {
        TextRowIterator { parser }
    }
}

impl<'a> RowIterator<'a> for TextRowIterator<'a> {
    fn next(&mut self) -> Option<SheetResult<Row>> {
        self.parser.parse_row()
    }
}
