//! Scalar and slice bindings of user-owned enumeration variables.
//!
//! A binding holds the exclusive borrow of the variable a flag writes to and
//! knows how to read, assign and stringify it given an [`EnumMapper`]. The
//! facade in [`crate::flag`] owns exactly one binding.

use crate::{EnumMapper, EnumValue, Result};

/// Rendering of a value that has no registered spelling.
pub const UNKNOWN: &str = "<unknown>";

/// Whether a binding holds one value or an ordered list of values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BindingKind {
    /// A single enumeration value.
    Scalar,
    /// A comma-separated list of enumeration values.
    Slice,
}

/// Getting, setting and stringifying a bound enumeration variable.
pub trait EnumBinding<E: EnumValue> {
    /// What [`get`](Self::get) hands out: `E` or `Vec<E>`.
    type Value: ?Sized;

    /// Scalar or slice, selects the completion strategy.
    const KIND: BindingKind;

    /// Current value of the bound variable.
    fn get(&self) -> &Self::Value;

    /// Assign from text. On error the bound variable is left untouched.
    fn set(&mut self, text: &str, names: &EnumMapper<E>) -> Result<()>;

    /// Render the current value using canonical spellings.
    fn render(&self, names: &EnumMapper<E>) -> String;
}

/// Binding of a single enumeration variable.
#[derive(Debug)]
pub struct EnumScalar<'a, E> {
    v: &'a mut E,
    unknown: &'static str,
}

impl<'a, E: EnumValue> EnumScalar<'a, E> {
    /// Bind `v`; unmapped values render as [`UNKNOWN`].
    pub const fn new(v: &'a mut E) -> Self {
        Self { v, unknown: UNKNOWN }
    }

    /// Bind `v`; unmapped values render as the empty string.
    ///
    /// Meant for enumerations whose zero value deliberately has no spelling,
    /// so help output doesn't advertise a default.
    pub const fn without_default(v: &'a mut E) -> Self {
        Self { v, unknown: "" }
    }
}

impl<E: EnumValue> EnumBinding<E> for EnumScalar<'_, E> {
    type Value = E;

    const KIND: BindingKind = BindingKind::Scalar;

    fn get(&self) -> &E {
        &*self.v
    }

    fn set(&mut self, text: &str, names: &EnumMapper<E>) -> Result<()> {
        *self.v = names.value_of(text)?;
        Ok(())
    }

    fn render(&self, names: &EnumMapper<E>) -> String {
        names.canonical(*self.v).unwrap_or(self.unknown).to_string()
    }
}

/// Binding of a list of enumeration values.
///
/// The first successful [`set`](EnumBinding::set) replaces whatever default
/// the list held; every later one merges new values in.
#[derive(Debug)]
pub struct EnumSlice<'a, E> {
    v: &'a mut Vec<E>,
    merge: bool,
}

impl<'a, E: EnumValue> EnumSlice<'a, E> {
    /// Bind `v`, which may hold default values.
    pub const fn new(v: &'a mut Vec<E>) -> Self {
        Self { v, merge: false }
    }

    /// Check if the list has been assigned at least once.
    pub const fn is_merging(&self) -> bool {
        self.merge
    }
}

impl<E: EnumValue> EnumBinding<E> for EnumSlice<'_, E> {
    type Value = Vec<E>;

    const KIND: BindingKind = BindingKind::Slice;

    fn get(&self) -> &Vec<E> {
        &*self.v
    }

    fn set(&mut self, text: &str, names: &EnumMapper<E>) -> Result<()> {
        let staged = text
            .split(',')
            .map(|id| names.value_of(id))
            .collect::<Result<Vec<E>>>()?;
        if !self.merge {
            *self.v = staged;
            self.merge = true;
            return Ok(());
        }
        for value in staged {
            if !self.v.contains(&value) {
                self.v.push(value);
            }
        }
        Ok(())
    }

    fn render(&self, names: &EnumMapper<E>) -> String {
        let rendered: Vec<&str> = self
            .v
            .iter()
            .map(|value| names.canonical(*value).unwrap_or(UNKNOWN))
            .collect();
        format!("[{}]", rendered.join(","))
    }
}
