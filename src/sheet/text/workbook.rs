//! Workbook implementation for text-based formats

use std::fs::File;
use std::io::Read;
use std::path::Path;

use bytes::Bytes;

use super::worksheet::TextWorksheet;
use crate::common::{BomKind, Error, detect_bom};
use crate::sheet::{Result as SheetResult, WorkbookTrait, Worksheet};

/// Configuration for parsing text-based spreadsheet files
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Field delimiter character
    pub delimiter: u8,
    /// Quote character for quoted fields
    pub quote: u8,
    /// Comment character (lines starting with this are ignored)
    pub comment: Option<u8>,
    /// Whether to trim whitespace from fields
    pub trim_whitespace: bool,
    /// Whether the first row contains headers
    pub has_headers: bool,
    /// Maximum length of a single record in bytes
    pub max_line_length: usize,
    /// Whether to skip a leading UTF-8 BOM
    pub strip_bom: bool,
    /// Reject invalid UTF-8 instead of replacing it
    pub strict_utf8: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',              // CSV default
            quote: b'"',                  // Standard CSV quoting
            comment: Some(b'#'),          // Common comment character
            trim_whitespace: false,       // Preserve whitespace by default
            has_headers: false,           // Every record is a data row
            max_line_length: 1024 * 1024, // 1MB max record length
            strip_bom: true,
            strict_utf8: false,
        }
    }
}

impl TextConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Set the comment character (None to disable comments)
    pub fn with_comment(mut self, comment: Option<u8>) -> Self {
        self.comment = comment;
        self
    }

    /// Enable/disable whitespace trimming
    pub fn with_trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    /// Set whether first row contains headers
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Set maximum record length
    pub fn with_max_line_length(mut self, max_len: usize) -> Self {
        self.max_line_length = max_len;
        self
    }

    /// Enable/disable skipping a leading UTF-8 BOM
    pub fn with_strip_bom(mut self, strip: bool) -> Self {
        self.strip_bom = strip;
        self
    }

    /// Enable/disable strict UTF-8 decoding
    pub fn with_strict_utf8(mut self, strict: bool) -> Self {
        self.strict_utf8 = strict;
        self
    }

    /// Create CSV (comma-separated) configuration
    pub fn csv() -> Self {
        Self::default()
    }

    /// Create TSV (tab-separated) configuration
    pub fn tsv() -> Self {
        Self::new().with_delimiter(b'\t')
    }

    /// Create PRN (semicolon-separated) configuration
    pub fn prn() -> Self {
        Self::new().with_delimiter(b';')
    }

    /// Create pipe-separated configuration
    pub fn pipe() -> Self {
        Self::new().with_delimiter(b'|')
    }

    /// Check that the delimiter and quote can be told apart from each
    /// other and from line endings.
    pub fn validate(&self) -> SheetResult<()> {
        if self.delimiter == self.quote {
            return Err(Error::InvalidFormat(format!(
                "Delimiter and quote must differ (both are {:?})",
                char::from(self.delimiter)
            )));
        }
        for (what, byte) in [("Delimiter", self.delimiter), ("Quote", self.quote)] {
            if byte == b'\n' || byte == b'\r' {
                return Err(Error::InvalidFormat(format!(
                    "{} cannot be a line ending",
                    what
                )));
            }
        }
        Ok(())
    }
}

/// Workbook implementation for text-based formats.
///
/// Text documents hold a single worksheet. The workbook owns the document
/// bytes; worksheets and their row cursors share them without copying.
#[derive(Debug)]
pub struct TextWorkbook {
    data: Bytes,
    config: TextConfig,
    worksheet_name: String,
}

impl TextWorkbook {
    /// Open a text workbook from a file path with default configuration
    pub fn open<P: AsRef<Path>>(path: P) -> SheetResult<Self> {
        Self::from_path_with_config(path, TextConfig::default())
    }

    /// Open a text workbook from a file path with custom configuration
    pub fn from_path_with_config<P: AsRef<Path>>(path: P, config: TextConfig) -> SheetResult<Self> {
        let mut file = File::open(path)?;
        Self::from_reader(&mut file, config)
    }

    /// Create a text workbook from any reader with configuration
    pub fn from_reader<R: Read>(reader: &mut R, config: TextConfig) -> SheetResult<Self> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        Self::from_data(Bytes::from(buffer), config)
    }

    /// Create a text workbook from bytes with configuration
    pub fn from_bytes(bytes: &[u8], config: TextConfig) -> SheetResult<Self> {
        Self::from_data(Bytes::copy_from_slice(bytes), config)
    }

    fn from_data(mut data: Bytes, config: TextConfig) -> SheetResult<Self> {
        let bom = detect_bom(&data);
        match bom {
            Some(BomKind::Utf8) if config.strip_bom => {
                data = data.slice(BomKind::Utf8.len()..);
            },
            Some(BomKind::Utf8) | None => {},
            Some(other) => {
                return Err(Error::Unsupported(format!(
                    "{} encoded text documents",
                    other.encoding_name()
                )));
            },
        }

        tracing::debug!(bytes = data.len(), bom = ?bom, "loaded text workbook");

        Ok(TextWorkbook {
            data,
            config,
            worksheet_name: "Sheet1".to_string(),
        })
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    /// Get the worksheet name
    pub fn worksheet_name(&self) -> &str {
        &self.worksheet_name
    }

    /// Set the worksheet name
    pub fn set_worksheet_name(&mut self, name: String) {
        self.worksheet_name = name;
    }

    /// Get the document's only worksheet
    pub fn worksheet(&self) -> TextWorksheet {
        TextWorksheet::new(
            self.data.clone(),
            self.config.clone(),
            self.worksheet_name.clone(),
        )
    }
}

impl WorkbookTrait for TextWorkbook {
    fn active_worksheet(&self) -> SheetResult<Box<dyn Worksheet + '_>> {
        Ok(Box::new(self.worksheet()))
    }

    fn worksheet_names(&self) -> Vec<String> {
        vec![self.worksheet_name.clone()]
    }

    fn worksheet_by_name(&self, name: &str) -> SheetResult<Box<dyn Worksheet + '_>> {
        if name == self.worksheet_name {
            self.active_worksheet()
        } else {
            Err(Error::ComponentNotFound(format!("Worksheet '{}'", name)))
        }
    }

    fn worksheet_by_index(&self, index: usize) -> SheetResult<Box<dyn Worksheet + '_>> {
        match index {
            0 => self.active_worksheet(),
            _ => Err(Error::ComponentNotFound(format!(
                "Worksheet index {} out of range",
                index
            ))),
        }
    }

    fn worksheet_count(&self) -> usize {
        1
    }

    fn active_sheet_index(&self) -> usize {
        0
    }
}
