//! Bidirectional mapping between enumeration values and their spellings.
//!
//! An [`EnumIdentifiers`] table associates each enumeration value with one or
//! more accepted spellings. The first spelling of a value is its *canonical*
//! name, used whenever the value is rendered back into text. An
//! [`EnumMapper`] combines such a table with a [`CaseSensitivity`] policy and
//! answers the two questions every flag needs: "what is this value called?"
//! and "which value does this text denote?".
//!
//! ## Case Sensitivity
//!
//! With [`CaseSensitivity::Insensitive`] the incoming text is lower-cased
//! before it is compared. Registered spellings are compared as they are, so
//! they must already be lower-case; the mapper never rewrites its table.
//!
//! ```rust
//! use enumflag::{CaseSensitivity, EnumIdentifiers, EnumMapper};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Mode {
//!     Foo,
//!     Bar,
//! }
//!
//! let names = EnumIdentifiers::new()
//!     .with(Mode::Foo, ["foo"])
//!     .with(Mode::Bar, ["bar", "b"]);
//! let mapper = EnumMapper::new(names, CaseSensitivity::Insensitive);
//!
//! assert_eq!(mapper.value_of("BAR"), Ok(Mode::Bar));
//! assert_eq!(mapper.value_of("b"), Ok(Mode::Bar));
//! assert_eq!(mapper.canonical(Mode::Bar), Some("bar"));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;

use tracing::trace;

use crate::{Error, Result};

/// Values that can back an enumeration flag.
///
/// Blanket-implemented for every small `Copy` type with equality and hashing:
/// plain integers, field-less enums and third-party level types alike.
pub trait EnumValue: Copy + Eq + Hash + fmt::Debug {}

impl<T> EnumValue for T where T: Copy + Eq + Hash + fmt::Debug {}

/// Whether spellings are matched verbatim or ignoring case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CaseSensitivity {
    /// Incoming text is lower-cased before matching; registered spellings
    /// must be lower-case.
    #[default]
    Insensitive,
    /// Spellings must match exactly.
    Sensitive,
}

impl CaseSensitivity {
    /// Check if spellings are matched verbatim.
    #[must_use]
    pub const fn is_sensitive(self) -> bool {
        matches!(self, Self::Sensitive)
    }

    pub(crate) fn normalize(self, text: &str) -> Cow<'_, str> {
        match self {
            Self::Sensitive => Cow::Borrowed(text),
            Self::Insensitive => Cow::Owned(text.to_lowercase()),
        }
    }
}

/// Ordered table of enumeration values and their spellings.
///
/// Entries keep insertion order. Inserting a value a second time replaces its
/// spellings in place. Two values must not share a spelling; if they do,
/// lookups resolve to whichever comes first in the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumIdentifiers<E> {
    entries: Vec<(E, Vec<String>)>,
}

impl<E> Default for EnumIdentifiers<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E: EnumValue> EnumIdentifiers<E> {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register the spellings of `value`, canonical spelling first.
    ///
    /// Returns the previous spellings if `value` was already present.
    pub fn insert<I, S>(&mut self, value: E, names: I) -> Option<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(v, _)| *v == value) {
            return Some(std::mem::replace(existing, names));
        }
        self.entries.push((value, names));
        None
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with<I, S>(mut self, value: E, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(value, names);
        self
    }

    /// Spellings registered for `value`, if any.
    pub fn get(&self, value: E) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, names)| names.as_slice())
    }

    /// Iterate over values and their spellings in table order.
    pub fn iter(&self) -> impl Iterator<Item = (E, &[String])> + '_ {
        self.entries
            .iter()
            .map(|(value, names)| (*value, names.as_slice()))
    }

    /// Number of enumeration values in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no enumeration value has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E, I, S> FromIterator<(E, I)> for EnumIdentifiers<E>
where
    E: EnumValue,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (E, I)>>(iter: T) -> Self {
        let mut identifiers = Self::new();
        identifiers.extend(iter);
        identifiers
    }
}

impl<E, I, S> Extend<(E, I)> for EnumIdentifiers<E>
where
    E: EnumValue,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn extend<T: IntoIterator<Item = (E, I)>>(&mut self, iter: T) {
        for (value, names) in iter {
            self.insert(value, names);
        }
    }
}

/// Immutable name table plus case policy for one enumeration type.
#[derive(Clone, Debug)]
pub struct EnumMapper<E> {
    identifiers: EnumIdentifiers<E>,
    sensitivity: CaseSensitivity,
}

impl<E: EnumValue> EnumMapper<E> {
    /// Create a mapper from a name table and a case policy.
    #[must_use]
    pub const fn new(identifiers: EnumIdentifiers<E>, sensitivity: CaseSensitivity) -> Self {
        Self {
            identifiers,
            sensitivity,
        }
    }

    /// All spellings of `value` in table order, or an empty slice if the value
    /// is unmapped.
    pub fn lookup(&self, value: E) -> &[String] {
        self.identifiers.get(value).unwrap_or_default()
    }

    /// Canonical spelling of `value`.
    pub fn canonical(&self, value: E) -> Option<&str> {
        self.lookup(value).first().map(String::as_str)
    }

    /// Resolve `name` to its enumeration value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unrecognized`] listing all accepted spellings when
    /// `name` matches none of them.
    pub fn value_of(&self, name: &str) -> Result<E> {
        let wanted = self.sensitivity.normalize(name);
        let found = self
            .identifiers
            .iter()
            .find(|(_, names)| names.iter().any(|n| n.as_str() == wanted.as_ref()));
        if let Some((value, _)) = found {
            return Ok(value);
        }
        trace!(input = name, "no enumeration value matches spelling");
        Err(Error::Unrecognized {
            input: name.to_string(),
            expected: self.expected(),
        })
    }

    /// Render every accepted spelling for error messages.
    ///
    /// Each value contributes one group of quoted spellings joined by `/`.
    /// Groups are sorted by their rendered text so the result does not depend
    /// on table order, e.g. `'bar'/'Bar', 'baz', 'foo'`.
    #[must_use]
    pub fn expected(&self) -> String {
        let mut groups: Vec<String> = self
            .identifiers
            .iter()
            .map(|(_, names)| {
                names
                    .iter()
                    .map(|name| format!("'{name}'"))
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .collect();
        groups.sort();
        groups.join(", ")
    }

    /// The underlying name table.
    pub const fn identifiers(&self) -> &EnumIdentifiers<E> {
        &self.identifiers
    }

    /// The case policy fixed at construction.
    pub const fn sensitivity(&self) -> CaseSensitivity {
        self.sensitivity
    }
}
