use std::error::Error;

use csv2json::cli::{self, CliCommand};
use tracing::debug;

fn run() -> Result<(), Box<dyn Error>> {
    let args = match cli::parse_env_args()? {
        CliCommand::Help => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        CliCommand::Convert(args) => args,
    };

    cli::init_tracing(args.verbosity);
    debug!(?args, "parsed command line");

    let config = args.into_config()?;
    csv2json::convert(config)?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        if e.is::<cli::ArgsError>() {
            eprintln!();
            eprintln!("{}", cli::USAGE);
        }
        std::process::exit(1);
    }
}
