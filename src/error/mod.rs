//! Error types for the conversion pipeline.
//!
//! This module provides:
//! - `Stage`: Indicates where a terminal failure happened in the pipeline
//! - `PipelineError`: The single terminal failure reported for a run
//! - `RowError`: A per-row soft error (the row is skipped, the run continues)
//! - `ParseError` / `WriteError`: Stage-local causes carried by `PipelineError`

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while opening the CSV input
    InputOpen,
    /// Malformed CSV or missing header
    Parse,
    /// Error while creating the JSON output
    OutputOpen,
    /// Error while writing or flushing the JSON output
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::InputOpen => write!(f, "InputOpen"),
            Stage::Parse => write!(f, "Parse"),
            Stage::OutputOpen => write!(f, "OutputOpen"),
            Stage::Write => write!(f, "Write"),
        }
    }
}

/// Terminal failure of a conversion run.
#[derive(Debug)]
pub struct PipelineError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the target (file path, "-" for stdin/stdout, etc.)
    pub target: String,
    /// The underlying error
    pub error: Box<dyn std::error::Error + Send + Sync>,
}

impl PipelineError {
    pub fn new(
        stage: Stage,
        target: impl Into<String>,
        error: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            stage,
            target: target.into(),
            error: error.into(),
        }
    }

    /// Downcast the underlying cause to a concrete error type.
    pub fn cause<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.error.downcast_ref::<E>()
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.target, self.error)
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.error.as_ref())
    }
}

/// Why a data row could not become a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("line does not match headers format: expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },
}

/// Kind of quoting violation found in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteErrorKind {
    /// A quoted field is still open at end of input
    Unterminated,
    /// A `"` appears inside a field that did not start with a quote
    BareQuote,
    /// Something other than a delimiter or line break follows a closing quote
    Extraneous,
}

impl fmt::Display for QuoteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteErrorKind::Unterminated => write!(f, "unterminated quoted field"),
            QuoteErrorKind::BareQuote => write!(f, "bare \" in non-quoted field"),
            QuoteErrorKind::Extraneous => write!(f, "extraneous or missing \" in quoted field"),
        }
    }
}

/// Fatal errors raised by the row parser.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input has no header row")]
    MissingHeader,

    #[error("line {line}: {kind}")]
    Quote { line: u64, kind: QuoteErrorKind },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl ParseError {
    /// Recover a quoting error that travelled through the reader as an I/O error.
    pub(crate) fn from_csv(err: csv::Error) -> Self {
        if let csv::ErrorKind::Io(io_err) = err.kind()
            && let Some(quote) = io_err
                .get_ref()
                .and_then(|inner| inner.downcast_ref::<crate::parser::QuoteError>())
        {
            return ParseError::Quote {
                line: quote.line,
                kind: quote.kind,
            };
        }
        ParseError::Csv(err)
    }
}

/// Fatal errors raised by the JSON array writer.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to write JSON output: {0}")]
    Io(#[from] std::io::Error),

    #[error("record stream ended without being closed")]
    Aborted,
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
