//! enumflag canary - exercises enumeration flags end to end
//!
//! Parses scalar, slice and third-party enumeration flags from the command
//! line and the environment, prints what it got, and answers dynamic shell
//! completion requests when invoked with `COMPLETE=<shell>`.

use anyhow::Result;
use clap_complete::CompleteEnv;
use tracing::debug;

mod cli;
mod logging;
mod output;

use cli::Commands;
use output::ModeReport;

/// Environment variable that switches the binary into completion mode.
const COMPLETE_VAR: &str = "COMPLETE";

fn main() -> Result<()> {
    // Completion requests are answered before any command line parsing, so
    // logging for them can only come from the environment.
    let completing = std::env::var_os(COMPLETE_VAR)
        .is_some_and(|shell| !shell.is_empty() && shell != "0");
    if completing {
        let (level, format) = cli::environment_globals();
        logging::initialize_logging(level, format)?;
    }
    CompleteEnv::with_factory(cli::command)
        .var(COMPLETE_VAR)
        .complete();

    let parsed = cli::parse_with(std::env::args_os(), |level, format| {
        if completing {
            return Ok(());
        }
        logging::initialize_logging(level, format)
    });
    let options = match parsed {
        Ok(options) => options,
        Err(err) => match err.downcast::<clap::Error>() {
            Ok(usage) => usage.exit(),
            Err(err) => return Err(err),
        },
    };
    debug!(?options, "parsed options");

    if options.command == Some(Commands::Test) {
        let report = ModeReport::new(options.mode, &options.modes);
        report.write(&mut std::io::stdout().lock(), options.format)?;
    }
    Ok(())
}
