//! # enumflag
//!
//! Enumeration-valued command-line flags for clap, with shell completion.
//!
//! An enumeration flag accepts a fixed set of spellings on the command line
//! and stores the corresponding value in a variable owned by the application.
//! Each value may have several spellings; the first one is canonical and is
//! used when the value is shown back to the user, for example as a default in
//! help output.
//!
//! ## Architecture
//!
//! - **Mapping**: [`EnumIdentifiers`] tables and the [`EnumMapper`] that
//!   resolves text to values under a [`CaseSensitivity`] policy
//! - **Bindings**: [`EnumScalar`] and [`EnumSlice`] own the borrow of the
//!   variable a flag writes to
//! - **Facade**: [`EnumFlag`] and [`EnumSliceFlag`] implement [`FlagValue`],
//!   the contract the clap glue in [`command`] works against
//! - **Completion**: [`Completor`] turns the name table plus optional
//!   [`EnumHelp`] texts into completion candidates
//! - **Error Handling**: [`Error`] separates bad user input from bad setup
//!
//! ## Quick Start
//!
//! ```rust
//! use enumflag::{CaseSensitivity, EnumIdentifiers, EnumSliceFlag};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum FooMode {
//!     Foo,
//!     Bar,
//!     Baz,
//! }
//!
//! let mut modes = vec![FooMode::Foo];
//! let mut flag = EnumSliceFlag::new_slice(
//!     &mut modes,
//!     "FooModes",
//!     EnumIdentifiers::new()
//!         .with(FooMode::Foo, ["foo"])
//!         .with(FooMode::Bar, ["bar", "b"])
//!         .with(FooMode::Baz, ["baz"]),
//!     CaseSensitivity::Insensitive,
//! );
//!
//! // The first assignment replaces the default, later ones merge.
//! flag.set("b,BAZ")?;
//! flag.set("foo,bar")?;
//! assert_eq!(flag.to_string(), "[bar,baz,foo]");
//! # Ok::<(), enumflag::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use enumflag::{CaseSensitivity, EnumFlag, EnumIdentifiers, Error};
//!
//! let mut level = 0_i8;
//! let mut flag = EnumFlag::new(
//!     &mut level,
//!     "level",
//!     EnumIdentifiers::new().with(0, ["info"]).with(1, ["warning", "warn"]),
//!     CaseSensitivity::Insensitive,
//! );
//! match flag.set("loud") {
//!     Err(Error::Unrecognized { input, expected }) => {
//!         assert_eq!(input, "loud");
//!         assert_eq!(expected, "'info', 'warning'/'warn'");
//!     },
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

/// Glue between flag values and clap
pub mod command;
/// Shell completion candidates
pub mod completion;
/// Error types and result aliases
pub mod error;
/// The flag value facade
pub mod flag;
/// Value to spelling mapping
pub mod mapper;
/// Scalar and slice bindings
pub mod value;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use completion::{
    Candidate, CompletionDirective, Completions, Completor, EnumHelp, HELP_SEPARATOR,
};
pub use error::{Error, Result};
pub use flag::{EnumFlag, EnumFlagType, EnumFlagValue, EnumSliceFlag, FlagValue};
pub use mapper::{CaseSensitivity, EnumIdentifiers, EnumMapper, EnumValue};
pub use value::{BindingKind, EnumBinding, EnumScalar, EnumSlice, UNKNOWN};
