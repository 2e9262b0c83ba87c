//! Asynchronous pipeline coordinator.
//!
//! The CSV tokenizer is synchronous, so the parser runs on a blocking task
//! and feeds a tokio channel; the writer is an ordinary async task writing
//! through an [`AsyncOutputTarget`](crate::io::AsyncOutputTarget).

use std::sync::Arc;

use tracing::info;

use crate::config::AsyncConvertConfig;
use crate::error::{PipelineError, Stage};
use crate::pipeline::{ConversionReport, parse_input, settle};
use crate::transport::async_channel;
use crate::writer::run_writer_async;

/// Tokio-based conversion pipeline.
#[derive(Debug, Clone)]
pub struct AsyncConverter {
    config: AsyncConvertConfig,
}

impl AsyncConverter {
    pub fn new(config: AsyncConvertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AsyncConvertConfig {
        &self.config
    }

    /// Run one conversion on the current tokio runtime.
    pub async fn run(&self) -> Result<ConversionReport, PipelineError> {
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
            .await
            .map_err(|e| PipelineError::new(Stage::OutputOpen, &output_id, e))?;

        info!(
            input = %input_id,
            output = %output_id,
            delimiter = %cfg.delimiter,
            "converting CSV to JSON"
        );

        let (sender, receiver) = async_channel(cfg.channel_capacity);
        let delimiter = cfg.delimiter;
        let diagnostics = Arc::clone(&cfg.diagnostics);

        let parser_task = tokio::task::spawn_blocking(move || {
            parse_input(reader, delimiter, sender, diagnostics.as_ref())
        });
        let writer_task = tokio::spawn(run_writer_async(receiver, sink, cfg.style));

        let (parsed, written) = tokio::join!(parser_task, writer_task);

        let report = settle(parsed.ok(), written.ok(), &input_id, &output_id)?;
        info!(
            records_written = report.records_written,
            rows_skipped = report.rows_skipped,
            "conversion finished"
        );
        Ok(report)
    }
}
