//! The explicit configuration value passed into the pipeline.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Settings;
use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::io::{FileInput, FileOutput, InputProvider, OutputTarget};
use crate::parser::Delimiter;
use crate::transport::DEFAULT_CAPACITY;
use crate::writer::Style;

/// Everything one conversion run needs.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Where the CSV comes from
    pub input: Arc<dyn InputProvider>,
    /// Where the JSON goes
    pub output: Arc<dyn OutputTarget>,
    pub delimiter: Delimiter,
    pub style: Style,
    /// Records buffered between parser and writer
    pub channel_capacity: usize,
    /// Receiver of skipped-row reports
    pub diagnostics: Arc<dyn Diagnostics>,
}

impl ConvertConfig {
    pub fn new(input: Arc<dyn InputProvider>, output: Arc<dyn OutputTarget>) -> Self {
        Self {
            input,
            output,
            delimiter: Delimiter::default(),
            style: Style::default(),
            channel_capacity: DEFAULT_CAPACITY,
            diagnostics: Arc::new(LogDiagnostics),
        }
    }

    /// File to file conversion.
    pub fn from_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self::new(
            Arc::new(FileInput::new(input)),
            Arc::new(FileOutput::new(output)),
        )
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn pretty(self, pretty: bool) -> Self {
        self.with_style(Style::from_pretty(pretty))
    }

    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Apply the delimiter, style and capacity from loaded settings.
    pub fn with_settings(self, settings: &Settings) -> Self {
        self.with_delimiter(settings.separator)
            .pretty(settings.pretty)
            .with_channel_capacity(settings.channel_capacity)
    }
}
