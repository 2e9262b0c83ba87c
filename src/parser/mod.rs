//! Row parser: CSV text in, header-keyed records out.
//!
//! The first record of the input is the header. Every following record
//! either becomes a [`Record`] (matching column count) or a [`SkippedRow`]
//! (soft error). Malformed quoting, invalid UTF-8 and I/O failures are
//! fatal and surface as [`ParseError`].

mod delimiter;
mod quote;

use std::io::Read;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::diagnostics::Diagnostics;
use crate::error::{ParseError, RowError};
use crate::record::{Header, Record};
use crate::transport::RecordSink;

pub use delimiter::{Delimiter, ParseDelimiterError};
pub use quote::{QuoteError, QuoteValidator};

/// A data row that was reported and left out of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line on which the row starts
    pub line: u64,
    /// The row's fields as parsed
    pub fields: Vec<String>,
    pub reason: RowError,
}

/// Outcome of reading one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Record(Record),
    Skipped(SkippedRow),
}

/// Counters reported by [`run_parser`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    pub records_sent: u64,
    pub rows_skipped: u64,
}

/// Lazily parses delimited text into records.
pub struct RowParser<R: Read> {
    reader: csv::Reader<QuoteValidator<R>>,
    header: Arc<Header>,
    row: csv::StringRecord,
}

impl<R: Read> RowParser<R> {
    /// Read the header from `input`. Fails with [`ParseError::MissingHeader`]
    /// if the input holds no record at all.
    pub fn new(input: R, delimiter: Delimiter) -> Result<Self, ParseError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter.as_byte())
            .has_headers(false)
            .flexible(true)
            .double_quote(true)
            .from_reader(QuoteValidator::new(input, delimiter.as_byte()));

        let mut row = csv::StringRecord::new();
        if !reader.read_record(&mut row).map_err(ParseError::from_csv)? {
            return Err(ParseError::MissingHeader);
        }

        let header = Header::new(row.iter().map(str::to_owned).collect());
        if header.has_duplicates() {
            warn!(
                duplicates = ?header.duplicate_names(),
                "header has duplicate column names; the last column of each name wins"
            );
        }
        debug!(columns = header.len(), %delimiter, "parsed CSV header");

        Ok(Self {
            reader,
            header: Arc::new(header),
            row,
        })
    }

    pub fn header(&self) -> &Arc<Header> {
        &self.header
    }

    /// Read the next data row, or `None` at end of input.
    pub fn next_row(&mut self) -> Result<Option<Row>, ParseError> {
        if !self
            .reader
            .read_record(&mut self.row)
            .map_err(ParseError::from_csv)?
        {
            return Ok(None);
        }

        let fields = self.row.iter().map(str::to_owned).collect();
        match Record::from_fields(&self.header, fields) {
            Ok(record) => Ok(Some(Row::Record(record))),
            Err(reason) => Ok(Some(Row::Skipped(SkippedRow {
                line: self.row.position().map(|p| p.line()).unwrap_or_default(),
                fields: self.row.iter().map(str::to_owned).collect(),
                reason,
            }))),
        }
    }
}

impl<R: Read> Iterator for RowParser<R> {
    type Item = Result<Row, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row().transpose()
    }
}

/// Producer loop: hand every record to `sender`, report skipped rows, then
/// close the channel.
///
/// If the consumer hangs up the loop stops early and returns the counts so
/// far. On a fatal error `sender` is dropped without being closed, which the
/// consumer observes as an aborted stream.
pub fn run_parser<R, S>(
    mut parser: RowParser<R>,
    sender: S,
    diagnostics: &dyn Diagnostics,
) -> Result<ParseSummary, ParseError>
where
    R: Read,
    S: RecordSink,
{
    let mut summary = ParseSummary::default();

    while let Some(row) = parser.next_row()? {
        match row {
            Row::Record(record) => {
                if sender.send(record).is_err() {
                    debug!(
                        records_sent = summary.records_sent,
                        "writer hung up; stopping parser"
                    );
                    return Ok(summary);
                }
                summary.records_sent += 1;
            }
            Row::Skipped(skipped) => {
                summary.rows_skipped += 1;
                diagnostics.row_skipped(&skipped);
            }
        }
    }

    sender.close();
    debug!(
        records_sent = summary.records_sent,
        rows_skipped = summary.rows_skipped,
        "CSV input exhausted"
    );
    Ok(summary)
}
