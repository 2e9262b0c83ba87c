//! Command-line parsing with sarge.

use sarge::ArgumentType;
use sarge::prelude::*;

use crate::cli::{ArgsError, CliArgs, CliCommand, Verbosity, positional_args};
use crate::parser::{Delimiter, ParseDelimiterError};

impl ArgumentType for Delimiter {
    type Error = ParseDelimiterError;

    const REPEATABLE: bool = false;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        Some(val.unwrap_or_default().parse())
    }

    fn default_value() -> Option<Self> {
        // Unset means "use the settings file".
        None
    }
}

/// Parse `std::env::args()` into a command.
pub fn parse_env_args() -> Result<CliCommand, ArgsError> {
    let mut reader = ArgumentReader::new();

    let help_ref = reader.add::<bool>(tag::both('h', "help"));
    let separator_ref = reader.add::<Delimiter>(tag::both('s', "separator"));
    let pretty_ref = reader.add::<bool>(tag::both('p', "pretty"));
    let output_ref = reader.add::<String>(tag::both('o', "output"));
    let config_ref = reader.add::<String>(tag::both('c', "config"));
    let verbose_ref = reader.add::<bool>(tag::both('v', "verbose"));
    let quiet_ref = reader.add::<bool>(tag::both('q', "quiet"));

    let args = reader
        .parse()
        .map_err(|e| ArgsError::Parse(e.to_string()))?;

    if matches!(help_ref.get(&args), Some(Ok(true))) {
        return Ok(CliCommand::Help);
    }

    let separator = match separator_ref.get(&args) {
        Some(Ok(delimiter)) => Some(delimiter),
        Some(Err(e)) => return Err(e.into()),
        None => None,
    };

    let verbose = matches!(verbose_ref.get(&args), Some(Ok(true)));
    let quiet = matches!(quiet_ref.get(&args), Some(Ok(true)));
    let verbosity = match (verbose, quiet) {
        (true, true) => return Err(ArgsError::ConflictingVerbosity),
        (true, false) => Verbosity::Verbose,
        (false, true) => Verbosity::Quiet,
        (false, false) => Verbosity::Normal,
    };

    let program = std::env::args().next();
    let remainder: Vec<String> = args.remainder().iter().cloned().collect();
    let mut cli = CliArgs::from_positional(positional_args(remainder, program.as_deref()))?;

    cli.separator = separator;
    cli.pretty = matches!(pretty_ref.get(&args), Some(Ok(true)));
    cli.output = output_ref.get(&args).and_then(Result::ok);
    cli.config = config_ref.get(&args).and_then(Result::ok).map(Into::into);
    cli.verbosity = verbosity;

    Ok(CliCommand::Convert(cli))
}
