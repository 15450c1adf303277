//! Error types for enumeration flags.
//!
//! Only two things can go wrong with an enumeration flag:
//!
//! - **Unrecognized spelling**: the user typed text that matches none of the
//!   registered spellings. This is ordinary user input failure and is always
//!   recoverable; the CLI framework reports it as a flag parsing error.
//! - **Invalid construction**: the application set up a flag with an unusable
//!   name table. This is a programming mistake and the panicking constructors
//!   abort setup on it.
//!
//! ```rust
//! use enumflag::{CaseSensitivity, EnumIdentifiers, EnumMapper, Error};
//!
//! let names: EnumIdentifiers<u8> = [(1, vec!["foo"]), (2, vec!["bar", "Bar"])]
//!     .into_iter()
//!     .collect();
//! let mapper = EnumMapper::new(names, CaseSensitivity::Sensitive);
//!
//! match mapper.value_of("nope") {
//!     Err(err @ Error::Unrecognized { .. }) => {
//!         assert!(err.is_recoverable());
//!         assert_eq!(err.to_string(), "must be 'bar'/'Bar', 'foo'");
//!     },
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use thiserror::Error;

/// The error type for all enumflag operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Text matched none of the spellings of the enumeration.
    ///
    /// The `Display` output only lists what would have been accepted, in a
    /// deterministic order, for example `must be 'bar'/'Bar', 'baz', 'foo'`.
    /// CLI frameworks usually prefix it with the offending input and flag
    /// name themselves.
    #[error("must be {expected}")]
    Unrecognized {
        /// The text as supplied, before any case folding.
        input: String,
        /// All accepted spellings, grouped per enumeration value.
        expected: String,
    },

    /// An enumeration flag was set up with an unusable name table.
    #[error("invalid enum flag construction: {0}")]
    InvalidConstruction(String),
}

impl Error {
    /// Whether the error stems from user input rather than a coding mistake.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Unrecognized { .. })
    }

    /// Get the error category as a string identifier.
    ///
    /// - `"unrecognized"` - unknown spelling supplied by the user
    /// - `"construction"` - invalid flag setup
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Unrecognized { .. } => "unrecognized",
            Self::InvalidConstruction(_) => "construction",
        }
    }
}

/// Convenience type alias for `Result<T, enumflag::Error>`.
pub type Result<T, E = Error> = std::result::Result<T, E>;
