//! Pipeline coordinator: runs the parser and the writer concurrently.
//!
//! Both resources are opened up front so open failures are reported with
//! their own stage. The parser and the writer then run on two scoped
//! threads connected by one bounded record channel, and the caller blocks
//! until both have finished. Any failure drops that side's channel end, so
//! the other side always wakes up.

use std::io::Read;
use std::sync::Arc;
use std::thread;

use tracing::info;

use crate::config::ConvertConfig;
use crate::diagnostics::Diagnostics;
use crate::error::{ParseError, PipelineError, Stage, WriteError};
use crate::parser::{Delimiter, ParseSummary, RowParser, run_parser};
use crate::transport::{self, RecordSink};
use crate::writer::{JsonArrayWriter, WriteSummary, run_writer};

/// Result of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Elements in the output array
    pub records_written: u64,
    /// Data rows left out because their column count did not match the header
    pub rows_skipped: u64,
}

/// Synchronous conversion pipeline.
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Run one conversion to completion or to its first terminal failure.
    pub fn run(&self) -> Result<ConversionReport, PipelineError> {
        let cfg = &self.config;
        let input_id = cfg.input.id().to_string();
        let output_id = cfg.output.id().to_string();

        let reader = cfg
            .input
            .open()
            .map_err(|e| PipelineError::new(Stage::InputOpen, &input_id, e))?;
        let sink = cfg
            .output
            .open()
            .map_err(|e| PipelineError::new(Stage::OutputOpen, &output_id, e))?;

        info!(
            input = %input_id,
            output = %output_id,
            delimiter = %cfg.delimiter,
            "converting CSV to JSON"
        );

        let (sender, receiver) = transport::channel(cfg.channel_capacity);
        let writer = JsonArrayWriter::new(sink, cfg.style);
        let delimiter = cfg.delimiter;
        let diagnostics = Arc::clone(&cfg.diagnostics);

        let (parsed, written) = thread::scope(|s| {
            let writer_task = thread::Builder::new()
                .name("json-writer".into())
                .spawn_scoped(s, move || run_writer(receiver, writer))
                .map_err(|e| PipelineError::new(Stage::Write, &output_id, e))?;

            let parser_task = thread::Builder::new()
                .name("csv-parser".into())
                .spawn_scoped(s, move || {
                    parse_input(reader, delimiter, sender, diagnostics.as_ref())
                })
                .map_err(|e| PipelineError::new(Stage::Parse, &input_id, e))?;

            Ok::<_, PipelineError>((parser_task.join().ok(), writer_task.join().ok()))
        })?;

        let report = settle(parsed, written, &input_id, &output_id)?;
        info!(
            records_written = report.records_written,
            rows_skipped = report.rows_skipped,
            "conversion finished"
        );
        Ok(report)
    }
}

/// Read the header and drive the producer loop. Returning early drops `sender`.
pub(crate) fn parse_input<R, S>(
    reader: R,
    delimiter: Delimiter,
    sender: S,
    diagnostics: &dyn Diagnostics,
) -> Result<ParseSummary, ParseError>
where
    R: Read,
    S: RecordSink,
{
    let parser = RowParser::new(reader, delimiter)?;
    run_parser(parser, sender, diagnostics)
}

/// Reduce the two task results to the single outcome of the run.
///
/// `None` stands for a task that panicked. A parse failure is the root cause
/// of the writer's `Aborted`, so it is reported first.
pub(crate) fn settle(
    parsed: Option<Result<ParseSummary, ParseError>>,
    written: Option<Result<WriteSummary, WriteError>>,
    input_id: &str,
    output_id: &str,
) -> Result<ConversionReport, PipelineError> {
    let parsed = parsed
        .ok_or_else(|| PipelineError::new(Stage::Parse, input_id, "parser task panicked"))?;
    let written = written
        .ok_or_else(|| PipelineError::new(Stage::Write, output_id, "writer task panicked"))?;

    match (parsed, written) {
        (Err(e), _) => Err(PipelineError::new(Stage::Parse, input_id, e)),
        (Ok(_), Err(e)) => Err(PipelineError::new(Stage::Write, output_id, e)),
        (Ok(parsed), Ok(written)) => Ok(ConversionReport {
            records_written: written.records_written,
            rows_skipped: parsed.rows_skipped,
        }),
    }
}
