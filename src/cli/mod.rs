//! Command-line front end helpers.
//!
//! Argument parsing (feature `cli`) only collects raw values into
//! [`CliArgs`]; validation and the mapping to a [`ConvertConfig`] live here
//! so they can be used and tested without a real command line.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::config::{ConvertConfig, Settings, SettingsError};
use crate::io::{FileInput, FileOutput, OutputTarget, StdoutOutput};
use crate::parser::{Delimiter, ParseDelimiterError};

#[cfg(feature = "cli")]
mod args;
#[cfg(feature = "cli")]
mod logging;

#[cfg(feature = "cli")]
pub use args::parse_env_args;
#[cfg(feature = "cli")]
pub use logging::init_tracing;

pub const USAGE: &str = "\
Usage: csv2json [options] <csvFile>
Options:
  -s, --separator <comma|semicolon>  Column separator (default: comma)
  -p, --pretty                       Generate pretty JSON
  -o, --output <path>                Output file, '-' for stdout
                                     (default: <csvFile> with a .json extension)
  -c, --config <file>                Load settings from a .json/.yaml file
  -v, --verbose                      Log debug details
  -q, --quiet                        Only log warnings and errors
  -h, --help                         Show this help";

/// How much the binary logs when `RUST_LOG` is not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn default_filter(self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
        }
    }
}

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("a filepath argument must be given")]
    MissingInput,

    #[error("expected exactly one input file, got {0}")]
    TooManyInputs(usize),

    #[error("file {} is not a CSV", .0.display())]
    NotCsv(PathBuf),

    #[error("file {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Separator(#[from] ParseDelimiterError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("--verbose and --quiet cannot be combined")]
    ConflictingVerbosity,

    #[error("invalid arguments: {0}")]
    Parse(String),
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Help,
    Convert(CliArgs),
}

/// Raw command-line values, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub input: PathBuf,
    /// Explicit output path, "-" for stdout
    pub output: Option<String>,
    /// Overrides the settings file when given
    pub separator: Option<Delimiter>,
    pub pretty: bool,
    pub config: Option<PathBuf>,
    pub verbosity: Verbosity,
}

impl CliArgs {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            separator: None,
            pretty: false,
            config: None,
            verbosity: Verbosity::default(),
        }
    }

    /// Build from the positional arguments; exactly one is expected.
    pub fn from_positional(positional: Vec<String>) -> Result<Self, ArgsError> {
        match positional.len() {
            0 => Err(ArgsError::MissingInput),
            1 => Ok(Self::new(positional.into_iter().next().unwrap_or_default())),
            n => Err(ArgsError::TooManyInputs(n)),
        }
    }

    pub fn validate(&self) -> Result<(), ArgsError> {
        check_input_file(&self.input)
    }

    pub fn output_target(&self) -> Arc<dyn OutputTarget> {
        match self.output.as_deref() {
            Some("-") => Arc::new(StdoutOutput::new()),
            Some(path) => Arc::new(FileOutput::new(path)),
            None => Arc::new(FileOutput::new(default_output_path(&self.input))),
        }
    }

    /// Validate and turn into a pipeline configuration. Flags win over the
    /// settings file.
    pub fn into_config(self) -> Result<ConvertConfig, ArgsError> {
        self.validate()?;

        let settings = match &self.config {
            Some(path) => Settings::from_path(path)?,
            None => Settings::default(),
        };

        let mut config = ConvertConfig::new(
            Arc::new(FileInput::new(self.input.clone())),
            self.output_target(),
        )
        .with_settings(&settings);

        if let Some(separator) = self.separator {
            config = config.with_delimiter(separator);
        }
        if self.pretty {
            config = config.pretty(true);
        }
        Ok(config)
    }
}

/// The input must carry a `.csv` extension and exist.
pub fn check_input_file(path: &Path) -> Result<(), ArgsError> {
    if path.extension().and_then(|e| e.to_str()) != Some("csv") {
        return Err(ArgsError::NotCsv(path.to_path_buf()));
    }

    match std::fs::metadata(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ArgsError::NotFound(path.to_path_buf()))
        }
        _ => Ok(()),
    }
}

/// Drop the executable name if the argument parser left it among the positionals.
#[cfg(feature = "cli")]
pub(crate) fn positional_args(remainder: Vec<String>, program: Option<&str>) -> Vec<String> {
    let mut positional = remainder;
    if program.is_some() && positional.first().map(String::as_str) == program {
        positional.remove(0);
    }
    positional
}

/// `dir/name.csv` -> `dir/name.json`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = name.strip_suffix(".csv").unwrap_or(&name);
    input.with_file_name(format!("{base}.json"))
}
