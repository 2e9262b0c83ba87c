//! Miette integration for pretty error reporting.

use miette::Diagnostic;
use thiserror::Error;

use super::{PipelineError, Stage};

/// A diagnostic wrapper for pipeline failures compatible with miette.
///
/// Always reported with [`miette::Severity::Error`]: a pipeline failure ends the run.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(severity(Error))]
pub struct ConvertDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,
}

fn help_for(stage: Stage) -> &'static str {
    match stage {
        Stage::InputOpen => "Check that the CSV file exists and is readable",
        Stage::Parse => "Check the CSV quoting and that the file has a header row",
        Stage::OutputOpen => "Check that the output directory exists and is writable",
        Stage::Write => "The output file is incomplete and should be discarded",
    }
}

impl From<PipelineError> for ConvertDiagnostic {
    fn from(e: PipelineError) -> Self {
        ConvertDiagnostic {
            message: format!("[{}] on '{}'", e.stage, e.target),
            help: Some(help_for(e.stage).into()),
            source: Some(e.error),
        }
    }
}

impl From<PipelineError> for miette::Report {
    fn from(e: PipelineError) -> Self {
        miette::Report::new(ConvertDiagnostic::from(e))
    }
}
