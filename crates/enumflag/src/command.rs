//! Glue between [`FlagValue`]s and clap.
//!
//! clap owns argument parsing; enumeration flags only take part through three
//! hooks:
//!
//! 1. [`flag_arg`] declares the argument: long name, value name taken from the
//!    flag's type name, every occurrence collected in order.
//! 2. [`apply_matches`] feeds the collected raw values (from the command line
//!    or from an `env` fallback) through [`FlagValue::set`] after parsing.
//! 3. [`register_completion`] attaches a [`Completor`] as clap's dynamic
//!    value completer.
//!
//! # Examples
//!
//! ```rust
//! use clap::Command;
//! use enumflag::{CaseSensitivity, EnumFlag, EnumIdentifiers, command};
//!
//! let mut mode = 0_u8;
//! let mut flag = EnumFlag::new(
//!     &mut mode,
//!     "mode",
//!     EnumIdentifiers::new().with(0, ["foo"]).with(1, ["bar"]),
//!     CaseSensitivity::Insensitive,
//! );
//! let mut cmd = Command::new("demo").arg(flag.arg("mode", "sets foo mode"));
//! let matches = cmd.clone().try_get_matches_from(["demo", "--mode", "BAR"])?;
//!
//! command::apply_matches(&mut flag, &matches, "mode", &mut cmd)?;
//! assert_eq!(mode, 1);
//! # Ok::<(), clap::Error>(())
//! ```

use std::ffi::OsStr;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate};
use tracing::debug;

use crate::{BindingKind, Completor, FlagValue};

/// Declare the clap argument `--<id>` for `value`.
///
/// The current value of the flag is appended to `help` as its default unless
/// there is nothing to show: an empty rendering for scalars, `[]` for slices.
pub fn flag_arg(value: &dyn FlagValue, id: &'static str, help: &str) -> Arg {
    let default = value.to_string();
    let has_default = match value.kind() {
        BindingKind::Scalar => !default.is_empty(),
        BindingKind::Slice => default != "[]",
    };
    let help = if has_default {
        format!("{help} [default: {default}]")
    } else {
        help.to_string()
    };
    Arg::new(id)
        .long(id)
        .value_name(value.type_name().to_string())
        .help(help)
        .num_args(1)
        .action(ArgAction::Append)
}

/// Feed every value clap collected for `id` into `value`, in order.
///
/// Returns how many values were applied; zero if the flag was absent.
///
/// # Errors
///
/// Returns a clap usage error (formatted against `cmd`) when a value isn't a
/// recognized spelling, isn't valid UTF-8, or `id` isn't an argument of the
/// matched command.
pub fn apply_matches(
    value: &mut dyn FlagValue,
    matches: &ArgMatches,
    id: &str,
    cmd: &mut Command,
) -> Result<usize, clap::Error> {
    let raw = matches
        .try_get_raw(id)
        .map_err(|err| cmd.error(ErrorKind::UnknownArgument, err))?;
    let Some(raw) = raw else {
        return Ok(0);
    };
    let mut applied = 0;
    for occurrence in raw {
        let Some(text) = occurrence.to_str() else {
            return Err(cmd.error(
                ErrorKind::InvalidUtf8,
                format!("invalid UTF-8 in value for \"--{id}\" flag"),
            ));
        };
        value.set(text).map_err(|err| {
            cmd.error(
                ErrorKind::InvalidValue,
                format!("invalid argument \"{text}\" for \"--{id}\" flag: {err}"),
            )
        })?;
        applied += 1;
    }
    debug!(flag = id, applied, value = %value, "applied enum flag values");
    Ok(applied)
}

/// Complete values of the argument `flag_name` of `cmd` using `completor`.
///
/// # Panics
///
/// clap panics if `cmd` has no argument `flag_name`.
pub fn register_completion(cmd: Command, flag_name: &str, completor: Completor) -> Command {
    cmd.mut_arg(flag_name, move |arg| {
        arg.add(ArgValueCompleter::new(move |current: &OsStr| {
            clap_candidates(&completor, current)
        }))
    })
}

/// Convert a [`Completor`] answer into clap completion candidates.
pub fn clap_candidates(completor: &Completor, current: &OsStr) -> Vec<CompletionCandidate> {
    completor
        .suggest(&current.to_string_lossy())
        .candidates
        .into_iter()
        .map(|candidate| {
            CompletionCandidate::new(candidate.value).help(candidate.help.map(Into::into))
        })
        .collect()
}
