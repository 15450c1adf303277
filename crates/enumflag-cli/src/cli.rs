//! Command-line interface of the canary.
//!
//! The command is assembled with clap's builder API because every flag is an
//! enumflag facade borrowing a field of [`Options`]. Parsing happens in two
//! steps: clap collects the raw values (from the command line or the
//! `ENUMFLAG_*` environment variables), then each facade applies them.

use std::ffi::OsString;

use clap::{ArgMatches, Command};
use enumflag::command::apply_matches;
use enumflag::{CaseSensitivity, EnumFlag, EnumFlagType, EnumHelp, EnumIdentifiers, EnumSliceFlag};
use tracing::Level;

use crate::output::OutputFormat;

/// Name of the binary.
pub const NAME: &str = "enumflag";

/// The modes exercised by `enumflag test`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FooMode {
    #[default]
    Foo,
    Bar,
    Baz,
}

impl EnumFlagType for FooMode {
    const TYPE_NAME: &'static str = "FooMode";

    fn identifiers() -> EnumIdentifiers<Self> {
        EnumIdentifiers::new()
            .with(Self::Foo, ["foo"])
            .with(Self::Bar, ["bar"])
            .with(Self::Baz, ["baz"])
    }

    fn help() -> EnumHelp<Self> {
        EnumHelp::new()
            .with(Self::Foo, "foos the output")
            .with(Self::Bar, "bars the output")
            .with(Self::Baz, "bazs the output")
    }
}

fn level_identifiers() -> EnumIdentifiers<Level> {
    EnumIdentifiers::new()
        .with(Level::TRACE, ["trace"])
        .with(Level::DEBUG, ["debug"])
        .with(Level::INFO, ["info"])
        .with(Level::WARN, ["warning", "warn"])
        .with(Level::ERROR, ["error"])
}

fn level_help() -> EnumHelp<Level> {
    EnumHelp::new()
        .with(Level::TRACE, "everything, including rejected spellings")
        .with(Level::DEBUG, "flag assignments and completion requests")
        .with(Level::INFO, "informational messages")
        .with(Level::WARN, "only warnings and errors")
        .with(Level::ERROR, "only errors")
}

/// Subcommands of the canary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the selected foo modes.
    Test,
}

/// Everything the canary was told on the command line or via environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub log: Level,
    pub format: OutputFormat,
    pub mode: FooMode,
    pub modes: Vec<FooMode>,
    pub command: Option<Commands>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            log: Level::WARN,
            format: OutputFormat::default(),
            mode: FooMode::default(),
            modes: Vec::new(),
            command: None,
        }
    }
}

/// The enumeration flags, each bound to its field of [`Options`].
struct Flags<'a> {
    log: EnumFlag<'a, Level>,
    format: EnumFlag<'a, OutputFormat>,
    mode: EnumFlag<'a, FooMode>,
    modes: EnumSliceFlag<'a, FooMode>,
}

impl<'a> Flags<'a> {
    fn new(options: &'a mut Options) -> Self {
        Self {
            log: EnumFlag::new(
                &mut options.log,
                "LEVEL",
                level_identifiers(),
                CaseSensitivity::Insensitive,
            ),
            format: EnumFlag::for_type(&mut options.format),
            mode: EnumFlag::for_type(&mut options.mode),
            modes: EnumSliceFlag::new_slice(
                &mut options.modes,
                "FooModes",
                FooMode::identifiers(),
                FooMode::SENSITIVITY,
            ),
        }
    }

    fn command(&self) -> Command {
        let test = Command::new("test")
            .about("test the canary")
            .arg(self.mode.arg("mode", "sets foo mode").env("ENUMFLAG_MODE"))
            .arg(self.modes.arg("modes", "sets foo modes").env("ENUMFLAG_MODES"));
        let test = self.mode.register_completion(test, "mode", &FooMode::help());
        let test = self.modes.register_completion(test, "modes", &FooMode::help());

        let cmd = Command::new(NAME)
            .version(env!("CARGO_PKG_VERSION"))
            .about("Canary exercising enumeration flags end to end")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                self.log
                    .arg("log", "sets the log level")
                    .env("ENUMFLAG_LOG")
                    .global(true),
            )
            .arg(
                self.format
                    .arg("format", "sets the output format")
                    .env("ENUMFLAG_FORMAT")
                    .global(true),
            )
            .subcommand(test);
        let cmd = self.log.register_completion(cmd, "log", &level_help());
        self.format
            .register_completion(cmd, "format", &OutputFormat::help())
    }

    fn apply_globals(
        &mut self,
        matches: &ArgMatches,
        cmd: &mut Command,
    ) -> Result<(), clap::Error> {
        apply_matches(&mut self.log, matches, "log", cmd)?;
        apply_matches(&mut self.format, matches, "format", cmd)?;
        Ok(())
    }

    fn apply_command(
        &mut self,
        matches: &ArgMatches,
        cmd: &mut Command,
    ) -> Result<Option<Commands>, clap::Error> {
        match matches.subcommand() {
            Some(("test", sub)) => {
                // Usage errors should show the subcommand's usage line.
                let mut test = cmd
                    .find_subcommand("test")
                    .cloned()
                    .unwrap_or_else(|| cmd.clone());
                apply_matches(&mut self.mode, sub, "mode", &mut test)?;
                apply_matches(&mut self.modes, sub, "modes", &mut test)?;
                Ok(Some(Commands::Test))
            },
            _ => Ok(None),
        }
    }
}

/// Build the canary's clap command with all defaults in place.
///
/// Also serves as the factory for dynamic shell completion.
pub fn command() -> Command {
    let mut options = Options::default();
    Flags::new(&mut options).command()
}

/// Global settings taken from the environment alone.
///
/// Used while answering completion requests, where there is no command line
/// to parse. Unrecognized values fall back to the defaults.
pub fn environment_globals() -> (Level, OutputFormat) {
    let mut options = Options::default();
    {
        let mut flags = Flags::new(&mut options);
        if let Ok(text) = std::env::var("ENUMFLAG_LOG") {
            let _ = flags.log.set(&text);
        }
        if let Ok(text) = std::env::var("ENUMFLAG_FORMAT") {
            let _ = flags.format.set(&text);
        }
    }
    (options.log, options.format)
}

/// Parse `args` (including the binary name) into [`Options`].
///
/// `on_globals` runs with the log level and output format as soon as they
/// are known, before any subcommand flag is applied, so logging set up there
/// sees the subcommand flags being applied.
///
/// # Errors
///
/// Returns a [`clap::Error`] for unknown arguments, unrecognized enumeration
/// spellings, and requests for help or version output, or whatever
/// `on_globals` fails with.
pub fn parse_with<I, T, F>(args: I, on_globals: F) -> anyhow::Result<Options>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: FnOnce(Level, OutputFormat) -> anyhow::Result<()>,
{
    let mut options = Options::default();
    let command = {
        let mut flags = Flags::new(&mut options);
        let mut cmd = flags.command();
        let matches = cmd.try_get_matches_from_mut(args)?;
        flags.apply_globals(&matches, &mut cmd)?;
        on_globals(*flags.log.get(), *flags.format.get())?;
        flags.apply_command(&matches, &mut cmd)?
    };
    options.command = command;
    Ok(options)
}
