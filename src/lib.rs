//! # csv2json
//!
//! Streaming conversion of delimited text (CSV) into one JSON array.
//!
//! ## Overview
//!
//! csv2json provides:
//! - **Row parsing**: The first record is the header, every following record
//!   becomes a JSON object keyed by header names
//! - **Soft row errors**: Rows whose column count does not match the header are
//!   reported and skipped, the run continues
//! - **Bounded pipeline**: Parser and writer run concurrently, connected by a
//!   bounded single-producer/single-consumer channel
//! - **Compact or pretty output**: Records appear in input order
//! - **Sync and Async**: A thread-based pipeline and a Tokio-based one
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use csv2json::{ConvertConfig, Delimiter, InMemorySink, InMemorySource};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sink = Arc::new(InMemorySink::new("out"));
//!     let config = ConvertConfig::new(
//!         Arc::new(InMemorySource::from_string("in", "id;name\n1;Ann\n")),
//!         sink.clone(),
//!     )
//!     .with_delimiter(Delimiter::Semicolon)
//!     .pretty(true);
//!
//!     let report = csv2json::convert(config)?;
//!     assert_eq!(report.records_written, 1);
//!     println!("{}", sink.contents_string());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `cli` - The `csv2json` binary: argument parsing and log output (enabled by default)
//! - `yaml` - YAML settings files (enabled by default)
//! - `async` - Async pipeline on Tokio
//! - `miette` - Pretty error reporting with miette
//!
//! ## Failure semantics
//!
//! A run ends with either a [`ConversionReport`] or exactly one
//! [`PipelineError`] whose [`Stage`] tells where it failed. Output written
//! before a failure is left in place and is not a valid JSON document.

// Core modules
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod io;
pub mod parser;
pub mod pipeline;
pub mod record;
pub mod transport;
pub mod writer;

// Async modules (feature-gated)
#[cfg(feature = "async")]
pub mod pipeline_async;

// Re-exports for convenience
pub use config::{ConvertConfig, Settings, SettingsError};
pub use diagnostics::{Diagnostics, LogDiagnostics, MemoryDiagnostics};
pub use error::{ParseError, PipelineError, QuoteErrorKind, RowError, Stage, WriteError};
pub use io::{
    FileInput, FileOutput, InMemorySink, InMemorySource, InputProvider, OutputTarget, StdinInput,
    StdoutOutput,
};
pub use parser::{Delimiter, RowParser, SkippedRow};
pub use pipeline::{ConversionReport, Converter};
pub use record::{Header, Record};
pub use writer::{JsonArrayWriter, Style};

// Async re-exports
#[cfg(feature = "async")]
pub use config::AsyncConvertConfig;
#[cfg(feature = "async")]
pub use io::{AsyncFileOutput, AsyncOutputTarget, AsyncStdoutOutput};
#[cfg(feature = "async")]
pub use pipeline_async::AsyncConverter;

/// Run one conversion with the synchronous pipeline.
pub fn convert(config: ConvertConfig) -> Result<ConversionReport, PipelineError> {
    Converter::new(config).run()
}

/// Run one conversion on the current Tokio runtime.
#[cfg(feature = "async")]
pub async fn convert_async(config: AsyncConvertConfig) -> Result<ConversionReport, PipelineError> {
    AsyncConverter::new(config).run().await
}

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::ConvertDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
