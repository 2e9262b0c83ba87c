//! Configuration of the async pipeline.

use std::sync::Arc;

use crate::config::Settings;
use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::io::{AsyncOutputTarget, InputProvider};
use crate::parser::Delimiter;
use crate::transport::DEFAULT_CAPACITY;
use crate::writer::Style;

/// Like [`ConvertConfig`](crate::config::ConvertConfig), with an async output.
///
/// The input stays synchronous: parsing runs on a blocking task.
#[derive(Debug, Clone)]
pub struct AsyncConvertConfig {
    pub input: Arc<dyn InputProvider>,
    pub output: Arc<dyn AsyncOutputTarget>,
    pub delimiter: Delimiter,
    pub style: Style,
    pub channel_capacity: usize,
    pub diagnostics: Arc<dyn Diagnostics>,
}

impl AsyncConvertConfig {
    pub fn new(input: Arc<dyn InputProvider>, output: Arc<dyn AsyncOutputTarget>) -> Self {
        Self {
            input,
            output,
            delimiter: Delimiter::default(),
            style: Style::default(),
            channel_capacity: DEFAULT_CAPACITY,
            diagnostics: Arc::new(LogDiagnostics),
        }
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

    pub fn with_settings(self, settings: &Settings) -> Self {
        self.with_delimiter(settings.separator)
            .pretty(settings.pretty)
            .with_channel_capacity(settings.channel_capacity)
    }
}
