//! Lazy parser for delimited text worksheets.
//!
//! The parser walks an in-memory document one record at a time. Each call
//! to [`TextParser::parse_row`] first locates the end of the record, then
//! splits and types its fields, so a faulty record never leaks into the
//! next one.

use memchr::{memchr, memchr_iter, memchr3};

use super::workbook::TextConfig;
use crate::common::Error;
use crate::sheet::{CellValue, Result as SheetResult, Row};

/// Streaming parser for delimited text formats
pub struct TextParser<'a> {
    data: &'a [u8],
    config: &'a TextConfig,
    pos: usize,
    /// 1-based line number at `pos`.
    line: u32,
}

impl<'a> TextParser<'a> {
    /// Create a new text parser positioned at the start of `data`
    pub fn new(data: &'a [u8], config: &'a TextConfig) -> Self {
        TextParser {
            data,
            config,
            pos: 0,
            line: 1,
        }
    }

    /// Parse the next row from the input.
    ///
    /// Returns `None` at end of input. A record that fails to decode is
    /// consumed and reported as an error; parsing resumes after it.
    pub fn parse_row(&mut self) -> Option<SheetResult<Row>> {
        loop {
            if self.pos >= self.data.len() {
                return None;
            }

            // Comment lines are skipped entirely
            if self.config.comment == Some(self.data[self.pos]) {
                self.skip_line();
                continue;
            }

            return Some(self.parse_record());
        }
    }

    fn skip_line(&mut self) {
        match memchr(b'\n', &self.data[self.pos..]) {
            Some(offset) => self.pos += offset + 1,
            None => self.pos = self.data.len(),
        }
        self.line += 1;
    }

    fn parse_record(&mut self) -> SheetResult<Row> {
        let number = self.line;
        let start = self.pos;
        let (end, terminated) = self.find_record_end(start);

        let record = &self.data[start..end];
        self.line += memchr_iter(b'\n', record).count() as u32;
        self.pos = end;
        if self.pos < self.data.len() {
            // Consume the record's line feed
            self.pos += 1;
            self.line += 1;
        }

        if !terminated {
            return Err(Error::ParseError(format!(
                "Unterminated quoted field in row {}",
                number
            )));
        }

        if record.len() > self.config.max_line_length {
            return Err(Error::ParseError(format!(
                "Row {} is {} bytes long, exceeding the maximum line length of {} bytes",
                number,
                record.len(),
                self.config.max_line_length
            )));
        }

        let cells = self.split_fields(record, number)?;
        Ok(Row::new(number, cells))
    }

    /// Find the index of the line feed ending the record that starts at
    /// `start` (or the end of input). The flag is false when input ends
    /// inside a quoted field.
    fn find_record_end(&self, start: usize) -> (usize, bool) {
        let quote = self.config.quote;
        let mut in_quotes = false;
        let mut i = start;

        while let Some(offset) = memchr3(b'\n', quote, b'\\', &self.data[i..]) {
            let at = i + offset;
            let byte = self.data[at];
            i = at + 1;

            if byte == quote {
                in_quotes = !in_quotes;
            } else if byte == b'\\' {
                if in_quotes {
                    // Escaped byte never ends a field or a record
                    i += 1;
                }
            } else if !in_quotes {
                return (at, true);
            }

            if i >= self.data.len() {
                break;
            }
        }

        (self.data.len(), !in_quotes)
    }

    fn split_fields(&self, record: &[u8], number: u32) -> SheetResult<Vec<CellValue>> {
        let quote = self.config.quote;
        let delimiter = self.config.delimiter;

        let mut fields = Vec::new();
        let mut current_field = Vec::new();
        let mut in_quotes = false;
        let mut i = 0;

        while i < record.len() {
            let byte = record[i];
            i += 1;

            match byte {
                // CRLF line endings: the CR is dropped outside quotes
                b'\r' if !in_quotes => {},
                q if q == quote => {
                    if in_quotes {
                        if record.get(i) == Some(&quote) {
                            // Doubled quote
                            current_field.push(quote);
                            i += 1;
                        } else {
                            in_quotes = false;
                        }
                    } else {
                        in_quotes = true;
                    }
                },
                d if d == delimiter && !in_quotes => {
                    let column = fields.len() + 1;
                    fields.push(self.finish_field(&mut current_field, number, column)?);
                },
                b'\\' if in_quotes => match record.get(i) {
                    Some(&next_byte) => {
                        i += 1;
                        match next_byte {
                            b'n' => current_field.push(b'\n'),
                            b'r' => current_field.push(b'\r'),
                            b't' => current_field.push(b'\t'),
                            b'\\' => current_field.push(b'\\'),
                            q if q == quote => current_field.push(quote),
                            _ => {
                                // Unknown escape, keep both bytes
                                current_field.push(byte);
                                current_field.push(next_byte);
                            },
                        }
                    },
                    None => current_field.push(byte),
                },
                _ => current_field.push(byte),
            }
        }

        let column = fields.len() + 1;
        fields.push(self.finish_field(&mut current_field, number, column)?);
        Ok(fields)
    }

    /// Decode one field and infer its cell type
    fn finish_field(
        &self,
        current_field: &mut Vec<u8>,
        number: u32,
        column: usize,
    ) -> SheetResult<CellValue> {
        let mut field_bytes = std::mem::take(current_field);

        if self.config.trim_whitespace {
            let start = field_bytes
                .iter()
                .position(|b| !b.is_ascii_whitespace())
                .unwrap_or(field_bytes.len());
            let end = field_bytes
                .iter()
                .rposition(|b| !b.is_ascii_whitespace())
                .map_or(0, |i| i + 1);
            if start < end {
                field_bytes = field_bytes[start..end].to_vec();
            } else {
                field_bytes.clear();
            }
        }

        let field_str = match String::from_utf8(field_bytes) {
            Ok(s) => s,
            Err(e) if self.config.strict_utf8 => {
                return Err(Error::ParseError(format!(
                    "Invalid UTF-8 in row {}, column {}: {}",
                    number,
                    column,
                    e.utf8_error()
                )));
            },
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };

        Ok(infer_cell_value(field_str))
    }
}

/// Infer the cell type of a decoded field
pub fn infer_cell_value(field: String) -> CellValue {
    if field.is_empty() {
        CellValue::Empty
    } else if let Ok(int_val) = field.parse::<i64>() {
        CellValue::Int(int_val)
    } else if let Ok(float_val) = fast_float2::parse::<f64, _>(&field) {
        CellValue::Float(float_val)
    } else {
        match field.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" => CellValue::Bool(true),
            "false" | "no" | "off" => CellValue::Bool(false),
            _ => CellValue::String(field),
        }
    }
}
