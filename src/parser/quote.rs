//! Strict RFC 4180 quote checking.
//!
//! The `csv` tokenizer accepts malformed quoting silently (an unterminated
//! quote swallows the rest of the input into one field). [`QuoteValidator`]
//! sits between the raw input and the tokenizer and turns such input into a
//! [`QuoteError`], delivered as an `io::Error` of kind `InvalidData`.

use std::io::{self, Read};

use thiserror::Error;

use crate::error::QuoteErrorKind;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct QuoteError {
    /// 1-based physical line of the offending byte (or of the opening quote
    /// for an unterminated field).
    pub line: u64,
    pub kind: QuoteErrorKind,
}

impl From<QuoteError> for io::Error {
    fn from(err: QuoteError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    Start,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Read adapter tracking the field state of every byte that passes through.
///
/// Bytes before an offending byte are still handed out, so every complete
/// row ahead of the malformed one reaches the tokenizer. The error is then
/// returned on every following read.
#[derive(Debug)]
pub struct QuoteValidator<R> {
    inner: R,
    delimiter: u8,
    state: FieldState,
    line: u64,
    quote_line: u64,
    consumed: u64,
    bom_matched: usize,
    failed: Option<QuoteError>,
}

impl<R: Read> QuoteValidator<R> {
    pub fn new(inner: R, delimiter: u8) -> Self {
        Self {
            inner,
            delimiter,
            state: FieldState::Start,
            line: 1,
            quote_line: 1,
            consumed: 0,
            bom_matched: 0,
            failed: None,
        }
    }

    fn error(&self, kind: QuoteErrorKind) -> QuoteError {
        QuoteError {
            line: self.line,
            kind,
        }
    }

    fn is_bom_byte(&mut self, b: u8) -> bool {
        if self.bom_matched < UTF8_BOM.len()
            && self.consumed == self.bom_matched as u64
            && b == UTF8_BOM[self.bom_matched]
        {
            self.bom_matched += 1;
            return true;
        }
        false
    }

    /// Advance the state machine over `bytes`, returning the offset of the
    /// first offending byte.
    fn scan(&mut self, bytes: &[u8]) -> Result<(), (usize, QuoteError)> {
        for (i, &b) in bytes.iter().enumerate() {
            if self.is_bom_byte(b) {
                self.consumed += 1;
                continue;
            }
            self.consumed += 1;

            let at_boundary = b == b'\n' || b == b'\r' || b == self.delimiter;
            let next = match self.state {
                FieldState::Quoted if b == b'"' => FieldState::QuoteInQuoted,
                FieldState::Quoted => FieldState::Quoted,
                FieldState::QuoteInQuoted if b == b'"' => FieldState::Quoted,
                FieldState::QuoteInQuoted if at_boundary => FieldState::Start,
                FieldState::QuoteInQuoted => {
                    return Err((i, self.error(QuoteErrorKind::Extraneous)));
                }
                FieldState::Start | FieldState::Unquoted if at_boundary => FieldState::Start,
                FieldState::Start if b == b'"' => {
                    self.quote_line = self.line;
                    FieldState::Quoted
                }
                FieldState::Unquoted if b == b'"' => {
                    return Err((i, self.error(QuoteErrorKind::BareQuote)));
                }
                FieldState::Start | FieldState::Unquoted => FieldState::Unquoted,
            };

            if b == b'\n' {
                self.line += 1;
            }
            self.state = next;
        }
        Ok(())
    }
}

impl<R: Read> Read for QuoteValidator<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if let Some(err) = self.failed {
            return Err(err.into());
        }

        let n = self.inner.read(buf)?;
        if n == 0 {
            if self.state == FieldState::Quoted {
                let err = QuoteError {
                    line: self.quote_line,
                    kind: QuoteErrorKind::Unterminated,
                };
                self.failed = Some(err);
                return Err(err.into());
            }
            return Ok(0);
        }

        match self.scan(&buf[..n]) {
            Ok(()) => Ok(n),
            Err((offset, err)) => {
                self.failed = Some(err);
                if offset == 0 {
                    Err(err.into())
                } else {
                    Ok(offset)
                }
            }
        }
    }
}
