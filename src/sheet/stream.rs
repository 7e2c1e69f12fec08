//! Forward-only row streaming over a worksheet.
//!
//! A [`RowStream`] owns exactly one row cursor obtained from a [`Worksheet`]
//! and exposes it through an explicit `has_next` / `next_row` / `close`
//! contract. Rows are produced in source order, each exactly once.
//!
//! # Example
//!
//! ```rust
//! use sheetio::sheet::{RowStream, WorkbookTrait};
//! use sheetio::sheet::text::{TextConfig, TextWorkbook};
//!
//! let workbook = TextWorkbook::from_bytes(b"a,1\nb,2\n", TextConfig::default())?;
//! let sheet = workbook.active_worksheet()?;
//!
//! let mut stream = RowStream::new(&sheet)?;
//! while stream.has_next()? {
//!     let row = stream.next_row()?;
//!     println!("{}: {:?}", row.number(), row.cells());
//! }
//! stream.close();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;
use std::iter::FusedIterator;

use thiserror::Error;

use super::traits::{RowIterator, Worksheet};
use super::types::{Result as SheetResult, Row};
use crate::common::Error;

/// Failures reported by a [`RowStream`].
#[derive(Error, Debug)]
pub enum StreamError {
    /// The worksheet could not supply a cursor or a row.
    #[error("source access error: {0}")]
    SourceAccess(#[from] Error),

    /// `next_row` was called with no row remaining.
    #[error("row stream is exhausted")]
    Exhausted,

    /// The stream was used after `close`.
    #[error("row stream is closed")]
    Closed,
}

enum State<'a> {
    Open {
        cursor: Box<dyn RowIterator<'a> + 'a>,
        /// Row pulled by `has_next` and not yet handed out.
        peeked: Option<SheetResult<Row>>,
        /// Set once the cursor returned `None`; it is never polled again.
        exhausted: bool,
    },
    Closed,
}

/// Lazy, single-pass cursor over the rows of a worksheet.
///
/// The stream borrows the worksheet for its whole lifetime but never
/// owns it: closing the stream releases the cursor only.
pub struct RowStream<'a> {
    state: State<'a>,
    rows_read: usize,
}

impl<'a> RowStream<'a> {
    /// Bind a new stream to an open worksheet.
    pub fn new<W>(sheet: &'a W) -> Result<Self, StreamError>
    where
        W: Worksheet + ?Sized,
    {
        let cursor = sheet.rows().map_err(|err| {
            tracing::warn!(sheet = sheet.name(), error = %err, "failed to open row cursor");
            StreamError::SourceAccess(err)
        })?;
        tracing::debug!(sheet = sheet.name(), "row stream opened");

        Ok(RowStream {
            state: State::Open {
                cursor,
                peeked: None,
                exhausted: false,
            },
            rows_read: 0,
        })
    }

    /// Check whether at least one more row is available.
    ///
    /// Calling this repeatedly does not move the stream forward.
    pub fn has_next(&mut self) -> Result<bool, StreamError> {
        match &mut self.state {
            State::Closed => Err(StreamError::Closed),
            State::Open {
                cursor,
                peeked,
                exhausted,
            } => {
                if peeked.is_some() {
                    return Ok(true);
                }
                if *exhausted {
                    return Ok(false);
                }
                match cursor.next() {
                    Some(item) => {
                        *peeked = Some(item);
                        Ok(true)
                    },
                    None => {
                        *exhausted = true;
                        Ok(false)
                    },
                }
            },
        }
    }

    /// Fetch the next row and advance by one.
    ///
    /// A row the source failed to decode still consumes its position.
    pub fn next_row(&mut self) -> Result<Row, StreamError> {
        if !self.has_next()? {
            return Err(StreamError::Exhausted);
        }

        let item = match &mut self.state {
            State::Open { peeked, .. } => peeked.take(),
            State::Closed => return Err(StreamError::Closed),
        };

        match item {
            Some(Ok(row)) => {
                self.rows_read += 1;
                tracing::trace!(row = row.number(), cells = row.len(), "row read");
                Ok(row)
            },
            Some(Err(err)) => {
                tracing::warn!(error = %err, "source failed to produce row");
                Err(StreamError::SourceAccess(err))
            },
            None => Err(StreamError::Exhausted),
        }
    }

    /// Release the cursor and any buffered row.
    ///
    /// Idempotent. The worksheet and its workbook are left untouched.
    pub fn close(&mut self) {
        if let State::Open { .. } = self.state {
            self.state = State::Closed;
            tracing::debug!(rows_read = self.rows_read, "row stream closed");
        }
    }

    /// Check whether `close` has been called.
    pub fn is_closed(&self) -> bool {
        matches!(self.state, State::Closed)
    }

    /// Number of rows successfully returned so far.
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }
}

impl fmt::Debug for RowStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            State::Open { exhausted: true, peeked: None, .. } => "exhausted",
            State::Open { .. } => "open",
            State::Closed => "closed",
        };
        f.debug_struct("RowStream")
            .field("state", &state)
            .field("rows_read", &self.rows_read)
            .finish()
    }
}

impl Iterator for RowStream<'_> {
    type Item = Result<Row, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.has_next() {
            Ok(true) => Some(self.next_row()),
            Ok(false) | Err(_) => None,
        }
    }
}

impl FusedIterator for RowStream<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::CellValue;
    use proptest::prelude::*;

    /// In-memory worksheet whose rows are either values or decode faults.
    struct VecSheet {
        rows: Vec<std::result::Result<&'static str, &'static str>>,
        unavailable: bool,
    }

    impl VecSheet {
        fn new(values: &[&'static str]) -> Self {
            VecSheet {
                rows: values.iter().map(|v| Ok(*v)).collect(),
                unavailable: false,
            }
        }
    }

    struct VecCursor<'a> {
        rows: &'a [std::result::Result<&'static str, &'static str>],
        pos: usize,
        pulls: &'a std::cell::Cell<usize>,
    }

    impl<'a> RowIterator<'a> for VecCursor<'a> {
        fn next(&mut self) -> Option<SheetResult<Row>> {
            self.pulls.set(self.pulls.get() + 1);
            let item = self.rows.get(self.pos)?;
            self.pos += 1;
            Some(match item {
                Ok(v) => Ok(Row::new(
                    self.pos as u32,
                    vec![CellValue::String(v.to_string())],
                )),
                Err(msg) => Err(Error::ParseError(msg.to_string())),
            })
        }
    }

    struct CountingSheet {
        inner: VecSheet,
        pulls: std::cell::Cell<usize>,
    }

    impl Worksheet for CountingSheet {
        fn name(&self) -> &str {
            "Counting"
        }

        fn rows(&self) -> SheetResult<Box<dyn RowIterator<'_> + '_>> {
            if self.inner.unavailable {
                return Err(Error::CorruptedFile("sheet is unreadable".to_string()));
            }
            Ok(Box::new(VecCursor {
                rows: &self.inner.rows,
                pos: 0,
                pulls: &self.pulls,
            }))
        }
    }

    fn sheet(inner: VecSheet) -> CountingSheet {
        CountingSheet {
            inner,
            pulls: std::cell::Cell::new(0),
        }
    }

    fn text(row: &Row) -> &str {
        match row.get(1) {
            CellValue::String(s) => s,
            other => panic!("Unexpected cell: {:?}", other),
        }
    }

    #[test]
    fn test_three_rows_in_order() {
        let ws = sheet(VecSheet::new(&["A", "B", "C"]));
        let mut stream = RowStream::new(&ws).unwrap();

        assert!(stream.has_next().unwrap());
        assert_eq!(text(&stream.next_row().unwrap()), "A");
        assert!(stream.has_next().unwrap());
        assert_eq!(text(&stream.next_row().unwrap()), "B");
        assert!(stream.has_next().unwrap());
        assert_eq!(text(&stream.next_row().unwrap()), "C");
        assert!(!stream.has_next().unwrap());
        assert_eq!(stream.rows_read(), 3);
    }

    #[test]
    fn test_empty_source() {
        let ws = sheet(VecSheet::new(&[]));
        let mut stream = RowStream::new(&ws).unwrap();

        assert!(!stream.has_next().unwrap());
        assert!(matches!(stream.next_row(), Err(StreamError::Exhausted)));
    }

    #[test]
    fn test_exhaustion_is_permanent() {
        let ws = sheet(VecSheet::new(&["only"]));
        let mut stream = RowStream::new(&ws).unwrap();

        stream.next_row().unwrap();
        for _ in 0..3 {
            assert!(!stream.has_next().unwrap());
            assert!(matches!(stream.next_row(), Err(StreamError::Exhausted)));
        }
        // The cursor is not polled again once it reported the end.
        assert_eq!(ws.pulls.get(), 2);
    }

    #[test]
    fn test_has_next_does_not_advance() {
        let ws = sheet(VecSheet::new(&["A", "B"]));
        let mut stream = RowStream::new(&ws).unwrap();

        for _ in 0..5 {
            assert!(stream.has_next().unwrap());
        }
        assert_eq!(ws.pulls.get(), 1);
        assert_eq!(text(&stream.next_row().unwrap()), "A");
        assert_eq!(text(&stream.next_row().unwrap()), "B");
    }

    #[test]
    fn test_next_without_has_next() {
        let ws = sheet(VecSheet::new(&["A", "B"]));
        let mut stream = RowStream::new(&ws).unwrap();

        assert_eq!(stream.next_row().unwrap().number(), 1);
        assert_eq!(stream.next_row().unwrap().number(), 2);
        assert!(matches!(stream.next_row(), Err(StreamError::Exhausted)));
    }

    #[test]
    fn test_close_is_idempotent_and_terminal() {
        let ws = sheet(VecSheet::new(&["A", "B"]));
        let mut stream = RowStream::new(&ws).unwrap();
        assert!(stream.has_next().unwrap());

        stream.close();
        stream.close();
        assert!(stream.is_closed());

        assert!(matches!(stream.has_next(), Err(StreamError::Closed)));
        assert!(matches!(stream.next_row(), Err(StreamError::Closed)));
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_close_after_exhaustion() {
        let ws = sheet(VecSheet::new(&[]));
        let mut stream = RowStream::new(&ws).unwrap();
        assert!(!stream.has_next().unwrap());

        stream.close();
        stream.close();
        assert!(matches!(stream.has_next(), Err(StreamError::Closed)));
    }

    #[test]
    fn test_unavailable_source() {
        let mut inner = VecSheet::new(&["A"]);
        inner.unavailable = true;
        let ws = sheet(inner);

        match RowStream::new(&ws) {
            Err(StreamError::SourceAccess(Error::CorruptedFile(msg))) => {
                assert_eq!(msg, "sheet is unreadable");
            },
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_row_fault_is_passed_through() {
        let ws = sheet(VecSheet {
            rows: vec![Ok("A"), Err("bad bytes"), Ok("C")],
            unavailable: false,
        });
        let mut stream = RowStream::new(&ws).unwrap();

        assert_eq!(text(&stream.next_row().unwrap()), "A");
        assert!(stream.has_next().unwrap());
        let err = stream.next_row().unwrap_err();
        assert_eq!(err.to_string(), "source access error: Parse error: bad bytes");
        assert!(std::error::Error::source(&err).is_some());

        // No retry: the faulty row is consumed and the stream moves on.
        assert_eq!(text(&stream.next_row().unwrap()), "C");
        assert!(!stream.has_next().unwrap());
        assert_eq!(stream.rows_read(), 2);
    }

    #[test]
    fn test_iterator_adapter() {
        let ws = sheet(VecSheet::new(&["x", "y", "z"]));
        let stream = RowStream::new(&ws).unwrap();

        let numbers: Vec<u32> = stream.map(|row| row.unwrap().number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_independent_streams() {
        let ws = sheet(VecSheet::new(&["A", "B"]));
        let mut first = RowStream::new(&ws).unwrap();
        let mut second = RowStream::new(&ws).unwrap();

        assert_eq!(text(&first.next_row().unwrap()), "A");
        assert_eq!(text(&first.next_row().unwrap()), "B");
        assert_eq!(text(&second.next_row().unwrap()), "A");
        first.close();
        assert_eq!(text(&second.next_row().unwrap()), "B");
    }

    proptest! {
        #[test]
        fn prop_exactly_n_rows(n in 0usize..64) {
            let values: Vec<&'static str> = std::iter::repeat_n("v", n).collect();
            let ws = sheet(VecSheet::new(&values));
            let mut stream = RowStream::new(&ws).unwrap();

            let mut seen = 0usize;
            while stream.has_next().unwrap() {
                let row = stream.next_row().unwrap();
                seen += 1;
                prop_assert_eq!(row.number() as usize, seen);
            }
            prop_assert_eq!(seen, n);
            prop_assert!(matches!(stream.next_row(), Err(StreamError::Exhausted)));
        }
    }
}
