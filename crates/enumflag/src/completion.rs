//! Shell completion candidates for enumeration flags.
//!
//! A [`Completor`] is computed once from a name table and an optional
//! [`EnumHelp`] table, and then answers completion requests for whatever the
//! user has typed so far.
//!
//! - **Scalar flags** always get every spelling of every value, sorted. The
//!   invoking shell narrows the list down by prefix itself.
//! - **Slice flags** get the comma-separated list typed so far kept as a
//!   prefix, followed by each spelling not already present in that prefix.
//!   Typed names are compared under the flag's [`CaseSensitivity`].
//!
//! ```rust
//! use enumflag::{BindingKind, CaseSensitivity, Completor, EnumHelp, EnumIdentifiers};
//!
//! let names = EnumIdentifiers::new()
//!     .with(1_u8, ["foo"])
//!     .with(2_u8, ["bar"])
//!     .with(3_u8, ["baz"]);
//! let help = EnumHelp::new().with(1_u8, "foos the output");
//! let completor = Completor::new(
//!     BindingKind::Slice,
//!     &names,
//!     &help,
//!     CaseSensitivity::Insensitive,
//! );
//!
//! let rendered: Vec<String> = completor
//!     .suggest("BAR,")
//!     .candidates
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(rendered, ["BAR,baz", "BAR,foo\tfoos the output"]);
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::{BindingKind, CaseSensitivity, EnumIdentifiers, EnumValue};

/// Separates a candidate from its help text when rendered as one line.
pub const HELP_SEPARATOR: char = '\t';

/// Help texts for enumeration values, shown next to completion candidates.
///
/// Only the bare help text goes in here; the spelling prefix is added by the
/// [`Completor`] for every alias of the value.
#[derive(Clone, Debug)]
pub struct EnumHelp<E> {
    texts: HashMap<E, String>,
}

impl<E> Default for EnumHelp<E> {
    fn default() -> Self {
        Self {
            texts: HashMap::new(),
        }
    }
}

impl<E: EnumValue> PartialEq for EnumHelp<E> {
    fn eq(&self, other: &Self) -> bool {
        self.texts == other.texts
    }
}

impl<E: EnumValue> Eq for EnumHelp<E> {}

impl<E: EnumValue> EnumHelp<E> {
    /// Create an empty help table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            texts: HashMap::new(),
        }
    }

    /// Set the help text of `value`.
    pub fn insert(&mut self, value: E, text: impl Into<String>) -> Option<String> {
        self.texts.insert(value, text.into())
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, value: E, text: impl Into<String>) -> Self {
        self.insert(value, text);
        self
    }

    /// Help text of `value`, if registered.
    pub fn get(&self, value: E) -> Option<&str> {
        self.texts.get(&value).map(String::as_str)
    }
}

impl<E, S> FromIterator<(E, S)> for EnumHelp<E>
where
    E: EnumValue,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (E, S)>>(iter: T) -> Self {
        Self {
            texts: iter
                .into_iter()
                .map(|(value, text)| (value, text.into()))
                .collect(),
        }
    }
}

/// One completion candidate with its optional help text.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Candidate {
    /// Text to insert on the command line.
    pub value: String,
    /// Description shown next to the candidate.
    pub help: Option<String>,
}

impl Candidate {
    fn prefixed(&self, prefix: &str) -> Self {
        Self {
            value: format!("{prefix}{}", self.value),
            help: self.help.clone(),
        }
    }
}

/// Renders as `value` or `value<TAB>help`.
impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.help {
            Some(help) => write!(f, "{}{HELP_SEPARATOR}{help}", self.value),
            None => f.write_str(&self.value),
        }
    }
}

/// How the invoking shell should treat the returned candidates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CompletionDirective {
    /// Offer the candidates as they are; the shell narrows them by prefix.
    #[default]
    Default,
}

/// Result of a completion request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completions {
    /// Candidates in sorted order.
    pub candidates: Vec<Candidate>,
    /// Hint for the shell.
    pub directive: CompletionDirective,
}

/// Completion generator for one enumeration flag.
#[derive(Clone, Debug)]
pub struct Completor {
    kind: BindingKind,
    sensitivity: CaseSensitivity,
    candidates: Vec<Candidate>,
}

impl Completor {
    /// Precompute the sorted candidate list for every alias of every value.
    ///
    /// `sensitivity` should be the flag's own policy; slice completion uses it
    /// to recognize names already typed.
    #[must_use]
    pub fn new<E: EnumValue>(
        kind: BindingKind,
        identifiers: &EnumIdentifiers<E>,
        help: &EnumHelp<E>,
        sensitivity: CaseSensitivity,
    ) -> Self {
        let mut candidates: Vec<Candidate> = identifiers
            .iter()
            .flat_map(|(value, names)| {
                let help = help.get(value);
                names.iter().map(move |name| Candidate {
                    value: name.clone(),
                    help: help.map(str::to_string),
                })
            })
            .collect();
        candidates.sort();
        Self {
            kind,
            sensitivity,
            candidates,
        }
    }

    /// Completor for a scalar flag.
    #[must_use]
    pub fn scalar<E: EnumValue>(
        identifiers: &EnumIdentifiers<E>,
        help: &EnumHelp<E>,
        sensitivity: CaseSensitivity,
    ) -> Self {
        Self::new(BindingKind::Scalar, identifiers, help, sensitivity)
    }

    /// Completor for a slice flag.
    #[must_use]
    pub fn slice<E: EnumValue>(
        identifiers: &EnumIdentifiers<E>,
        help: &EnumHelp<E>,
        sensitivity: CaseSensitivity,
    ) -> Self {
        Self::new(BindingKind::Slice, identifiers, help, sensitivity)
    }

    /// Scalar or slice completion strategy.
    pub const fn kind(&self) -> BindingKind {
        self.kind
    }

    /// Candidates for the text typed so far.
    pub fn suggest(&self, to_complete: &str) -> Completions {
        let candidates = match self.kind {
            BindingKind::Scalar => self.candidates.clone(),
            BindingKind::Slice => self.suggest_remaining(to_complete),
        };
        debug!(
            kind = ?self.kind,
            input = to_complete,
            count = candidates.len(),
            "completing enum flag"
        );
        Completions {
            candidates,
            directive: CompletionDirective::Default,
        }
    }

    // Everything up to and including the last comma is kept verbatim; names
    // already listed there aren't offered again. Typed names are normalized
    // like `EnumMapper::value_of` does, registered spellings are not.
    fn suggest_remaining(&self, to_complete: &str) -> Vec<Candidate> {
        let prefix = to_complete
            .rfind(',')
            .map_or("", |idx| &to_complete[..=idx]);
        let consumed: Vec<Cow<'_, str>> = prefix
            .split(',')
            .filter(|id| !id.is_empty())
            .map(|id| self.sensitivity.normalize(id))
            .collect();
        self.candidates
            .iter()
            .filter(|candidate| !consumed.iter().any(|id| *id == candidate.value))
            .map(|candidate| candidate.prefixed(prefix))
            .collect()
    }
}
