//! Output formats and the report printed by `enumflag test`.

use std::fmt;
use std::io::Write;

use anyhow::Result;
use enumflag::{EnumFlagType, EnumHelp, EnumIdentifiers, EnumMapper, UNKNOWN};
use serde::Serialize;

use crate::cli::FooMode;

/// Output format for command results.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

impl OutputFormat {
    /// Check if this format is meant for other programs.
    #[must_use]
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json)
    }
}

impl EnumFlagType for OutputFormat {
    const TYPE_NAME: &'static str = "FORMAT";

    fn identifiers() -> EnumIdentifiers<Self> {
        EnumIdentifiers::new()
            .with(Self::Text, ["text"])
            .with(Self::Json, ["json"])
    }

    fn help() -> EnumHelp<Self> {
        EnumHelp::new()
            .with(Self::Text, "human-readable text")
            .with(Self::Json, "a single JSON object")
    }
}

/// Foo modes picked on the command line, numerically and by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeReport {
    pub mode: u8,
    pub mode_name: String,
    pub modes: Vec<u8>,
    pub mode_names: Vec<String>,
}

impl ModeReport {
    pub fn new(mode: FooMode, modes: &[FooMode]) -> Self {
        let names = EnumMapper::new(FooMode::identifiers(), FooMode::SENSITIVITY);
        let name = |value: FooMode| names.canonical(value).unwrap_or(UNKNOWN).to_string();
        Self {
            mode: mode as u8,
            mode_name: name(mode),
            modes: modes.iter().map(|&value| value as u8).collect(),
            mode_names: modes.iter().map(|&value| name(value)).collect(),
        }
    }

    /// Write the report to `out` in the requested format.
    pub fn write(&self, out: &mut impl Write, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => write!(out, "{self}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)?;
            },
        }
        Ok(())
    }
}

impl fmt::Display for ModeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modes: Vec<String> = self.modes.iter().map(ToString::to_string).collect();
        writeln!(f, "mode is: {}={:?}", self.mode, self.mode_name)?;
        writeln!(
            f,
            "modes are: [{}]={:?}",
            modes.join(","),
            format!("[{}]", self.mode_names.join(","))
        )
    }
}
