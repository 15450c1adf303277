//! The flag value facade handed to the CLI framework.
//!
//! [`EnumFlagValue`] wraps a scalar or slice binding together with the name
//! mapper and a user-friendly type name. Both flavors implement
//! [`FlagValue`], the contract the framework glue in [`crate::command`] works
//! against.
//!
//! # Examples
//!
//! ```rust
//! use enumflag::{CaseSensitivity, EnumFlag, EnumIdentifiers};
//!
//! #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
//! enum FooMode {
//!     #[default]
//!     Foo,
//!     Bar,
//! }
//!
//! let mut mode = FooMode::default();
//! let mut flag = EnumFlag::new(
//!     &mut mode,
//!     "mode",
//!     EnumIdentifiers::new()
//!         .with(FooMode::Foo, ["foo"])
//!         .with(FooMode::Bar, ["bar"]),
//!     CaseSensitivity::Insensitive,
//! );
//!
//! flag.set("bAr")?;
//! assert_eq!(flag.to_string(), "bar");
//! assert_eq!(flag.type_name(), "mode");
//! assert_eq!(mode, FooMode::Bar);
//! # Ok::<(), enumflag::Error>(())
//! ```

use std::fmt;

use clap::{Arg, Command};
use tracing::debug;

use crate::command;
use crate::completion::{Completor, EnumHelp};
use crate::value::{BindingKind, EnumBinding, EnumScalar, EnumSlice};
use crate::{CaseSensitivity, EnumIdentifiers, EnumMapper, EnumValue, Error, Result};

/// The value contract expected by the CLI framework glue.
///
/// `Display` provides the textual form used for defaults in help output.
pub trait FlagValue: fmt::Display {
    /// Assign the flag from one occurrence of its textual value.
    fn set(&mut self, text: &str) -> Result<()>;

    /// User-friendly name of the value type, shown in usage text.
    fn type_name(&self) -> &str;

    /// Scalar or slice.
    fn kind(&self) -> BindingKind;
}

/// Enumeration types that describe their own spellings.
///
/// Implementing this trait is optional; it just saves passing the same name
/// table at every construction site.
///
/// ```rust
/// use enumflag::{EnumFlag, EnumFlagType, EnumIdentifiers};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// enum Color {
///     Auto,
///     Never,
/// }
///
/// impl EnumFlagType for Color {
///     const TYPE_NAME: &'static str = "when";
///
///     fn identifiers() -> EnumIdentifiers<Self> {
///         EnumIdentifiers::new()
///             .with(Self::Auto, ["auto"])
///             .with(Self::Never, ["never", "no"])
///     }
/// }
///
/// let mut color = Color::Auto;
/// let mut flag = EnumFlag::for_type(&mut color);
/// flag.set("no")?;
/// assert_eq!(flag.to_string(), "never");
/// # Ok::<(), enumflag::Error>(())
/// ```
pub trait EnumFlagType: EnumValue {
    /// Name shown in usage text.
    const TYPE_NAME: &'static str;

    /// Case policy for the spellings.
    const SENSITIVITY: CaseSensitivity = CaseSensitivity::Insensitive;

    /// Spellings of every value, canonical spelling first.
    fn identifiers() -> EnumIdentifiers<Self>;

    /// Completion help texts.
    fn help() -> EnumHelp<Self> {
        EnumHelp::new()
    }
}

/// An enumeration flag value, scalar or slice depending on `B`.
#[derive(Debug)]
pub struct EnumFlagValue<E, B> {
    value: B,
    enumtype: String,
    names: EnumMapper<E>,
}

/// Scalar enumeration flag bound to a single variable.
pub type EnumFlag<'a, E> = EnumFlagValue<E, EnumScalar<'a, E>>;

/// Slice enumeration flag bound to a list variable.
pub type EnumSliceFlag<'a, E> = EnumFlagValue<E, EnumSlice<'a, E>>;

fn check_mapping<E: EnumValue>(constructor: &str, mapping: &EnumIdentifiers<E>) -> Result<()> {
    if mapping.is_empty() {
        return Err(Error::InvalidConstruction(format!(
            "{constructor} requires mapping not to be empty"
        )));
    }
    Ok(())
}

#[allow(clippy::panic)]
fn or_abort<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

impl<'a, E: EnumValue> EnumFlag<'a, E> {
    /// Wrap `flag` so it can be set from its textual spellings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConstruction`] if `mapping` is empty.
    pub fn try_new(
        flag: &'a mut E,
        typename: impl Into<String>,
        mapping: EnumIdentifiers<E>,
        sensitivity: CaseSensitivity,
    ) -> Result<Self> {
        check_mapping("EnumFlag::new", &mapping)?;
        Ok(Self::assemble(EnumScalar::new(flag), typename, mapping, sensitivity))
    }

    /// Like [`try_new`](Self::try_new), but aborts on invalid construction.
    ///
    /// # Panics
    ///
    /// Panics if `mapping` is empty.
    pub fn new(
        flag: &'a mut E,
        typename: impl Into<String>,
        mapping: EnumIdentifiers<E>,
        sensitivity: CaseSensitivity,
    ) -> Self {
        or_abort(Self::try_new(flag, typename, mapping, sensitivity))
    }

    /// Wrap `flag` whose current value deliberately has no spelling.
    ///
    /// An unmapped value renders as the empty string instead of `<unknown>`,
    /// so help output shows no default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConstruction`] if `mapping` is empty.
    pub fn try_new_without_default(
        flag: &'a mut E,
        typename: impl Into<String>,
        mapping: EnumIdentifiers<E>,
        sensitivity: CaseSensitivity,
    ) -> Result<Self> {
        check_mapping("EnumFlag::new_without_default", &mapping)?;
        Ok(Self::assemble(
            EnumScalar::without_default(flag),
            typename,
            mapping,
            sensitivity,
        ))
    }

    /// Like [`try_new_without_default`](Self::try_new_without_default), but
    /// aborts on invalid construction.
    ///
    /// # Panics
    ///
    /// Panics if `mapping` is empty.
    pub fn new_without_default(
        flag: &'a mut E,
        typename: impl Into<String>,
        mapping: EnumIdentifiers<E>,
        sensitivity: CaseSensitivity,
    ) -> Self {
        or_abort(Self::try_new_without_default(
            flag,
            typename,
            mapping,
            sensitivity,
        ))
    }
}

impl<'a, E: EnumFlagType> EnumFlag<'a, E> {
    /// Wrap `flag` using the type's own spellings and case policy.
    pub fn for_type(flag: &'a mut E) -> Self {
        Self::new(flag, E::TYPE_NAME, E::identifiers(), E::SENSITIVITY)
    }
}

impl<'a, E: EnumValue> EnumSliceFlag<'a, E> {
    /// Wrap the list `flag`; its current contents act as the default until the
    /// first successful [`set`](EnumFlagValue::set).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConstruction`] if `mapping` is empty.
    pub fn try_new_slice(
        flag: &'a mut Vec<E>,
        typename: impl Into<String>,
        mapping: EnumIdentifiers<E>,
        sensitivity: CaseSensitivity,
    ) -> Result<Self> {
        check_mapping("EnumSliceFlag::new_slice", &mapping)?;
        Ok(Self::assemble(EnumSlice::new(flag), typename, mapping, sensitivity))
    }

    /// Like [`try_new_slice`](Self::try_new_slice), but aborts on invalid
    /// construction.
    ///
    /// # Panics
    ///
    /// Panics if `mapping` is empty.
    pub fn new_slice(
        flag: &'a mut Vec<E>,
        typename: impl Into<String>,
        mapping: EnumIdentifiers<E>,
        sensitivity: CaseSensitivity,
    ) -> Self {
        or_abort(Self::try_new_slice(flag, typename, mapping, sensitivity))
    }
}

impl<'a, E: EnumFlagType> EnumSliceFlag<'a, E> {
    /// Wrap the list `flag` using the type's own spellings and case policy.
    pub fn for_type_slice(flag: &'a mut Vec<E>) -> Self {
        Self::new_slice(flag, E::TYPE_NAME, E::identifiers(), E::SENSITIVITY)
    }
}

impl<E: EnumValue, B: EnumBinding<E>> EnumFlagValue<E, B> {
    fn assemble(
        value: B,
        typename: impl Into<String>,
        mapping: EnumIdentifiers<E>,
        sensitivity: CaseSensitivity,
    ) -> Self {
        Self {
            value,
            enumtype: typename.into(),
            names: EnumMapper::new(mapping, sensitivity),
        }
    }

    /// Set the flag from text. An unrecognized spelling leaves the bound
    /// variable unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unrecognized`] listing the accepted spellings.
    pub fn set(&mut self, text: &str) -> Result<()> {
        self.value.set(text, &self.names)?;
        debug!(flag = %self.enumtype, input = text, value = %self, "enum flag set");
        Ok(())
    }

    /// Current value(s) of the bound variable.
    pub fn get(&self) -> &B::Value {
        self.value.get()
    }

    /// User-friendly name of the enumeration type.
    pub fn type_name(&self) -> &str {
        &self.enumtype
    }

    /// The mapper used for parsing and rendering.
    pub const fn mapper(&self) -> &EnumMapper<E> {
        &self.names
    }

    /// Completion generator matching this flag's flavor and case policy.
    pub fn completor(&self, help: &EnumHelp<E>) -> Completor {
        Completor::new(
            B::KIND,
            self.names.identifiers(),
            help,
            self.names.sensitivity(),
        )
    }

    /// clap argument named `id` for this flag; see [`command::flag_arg`].
    pub fn arg(&self, id: &'static str, help: &str) -> Arg {
        command::flag_arg(self, id, help)
    }

    /// Register completion of this flag's spellings on the argument
    /// `flag_name` of `cmd`.
    ///
    /// # Panics
    ///
    /// clap panics if `cmd` has no argument `flag_name`.
    pub fn register_completion(
        &self,
        cmd: Command,
        flag_name: &str,
        help: &EnumHelp<E>,
    ) -> Command {
        command::register_completion(cmd, flag_name, self.completor(help))
    }
}

impl<E: EnumValue, B: EnumBinding<E>> fmt::Display for EnumFlagValue<E, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value.render(&self.names))
    }
}

impl<E: EnumValue, B: EnumBinding<E>> FlagValue for EnumFlagValue<E, B> {
    fn set(&mut self, text: &str) -> Result<()> {
        Self::set(self, text)
    }

    fn type_name(&self) -> &str {
        &self.enumtype
    }

    fn kind(&self) -> BindingKind {
        B::KIND
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_support::{FooMode, foo_mode_identifiers};

    mod scalar {
        use super::*;

        #[test]
        fn test_canonical_text_and_type() {
            let mut mode = FooMode::Bar;
            let flag = EnumFlag::new(
                &mut mode,
                "mode",
                foo_mode_identifiers(),
                CaseSensitivity::Insensitive,
            );
            assert_eq!(flag.to_string(), "bar");
            assert_eq!(flag.type_name(), "mode");
            assert_eq!(FlagValue::kind(&flag), BindingKind::Scalar);
        }

        #[test]
        fn test_rejects_invalid_values() {
            let mut mode = FooMode::Foo;
            let mut flag = EnumFlag::new(
                &mut mode,
                "mode",
                foo_mode_identifiers(),
                CaseSensitivity::Sensitive,
            );
            let err = flag.set("FOOBAR").unwrap_err();
            assert_eq!(err.to_string(), "must be 'bar'/'Bar', 'baz', 'foo'");
            assert_eq!(*flag.get(), FooMode::Foo);
        }

        #[test]
        fn test_sets_from_text() {
            let mut mode = FooMode::Unmapped;
            let mut flag = EnumFlag::new(
                &mut mode,
                "mode",
                foo_mode_identifiers(),
                CaseSensitivity::Sensitive,
            );
            flag.set("foo").unwrap();
            flag.set("Bar").unwrap();
            assert_eq!(*flag.get(), FooMode::Bar);
            assert_eq!(mode, FooMode::Bar);
        }

        #[test]
        fn test_without_default_renders_empty() {
            let mut mode = FooMode::Unmapped;
            let flag = EnumFlag::new_without_default(
                &mut mode,
                "mode",
                foo_mode_identifiers(),
                CaseSensitivity::Insensitive,
            );
            assert_eq!(flag.to_string(), "");
        }

        #[test]
        fn test_unmapped_default_renders_unknown() {
            let mut mode = FooMode::Unmapped;
            let flag = EnumFlag::new(
                &mut mode,
                "mode",
                foo_mode_identifiers(),
                CaseSensitivity::Insensitive,
            );
            assert_eq!(flag.to_string(), "<unknown>");
        }

        #[test]
        fn test_works_with_signed_integers() {
            let mut level: i32 = 4;
            let mut flag = EnumFlag::new(
                &mut level,
                "log",
                EnumIdentifiers::new()
                    .with(-4, ["debug"])
                    .with(0, ["info"])
                    .with(4, ["warning", "warn"])
                    .with(8, ["error"]),
                CaseSensitivity::Insensitive,
            );
            assert_eq!(flag.to_string(), "warning");
            flag.set("debug").unwrap();
            assert_eq!(level, -4);
        }
    }

    mod slice {
        use super::*;

        #[test]
        fn test_canonical_text_and_type() {
            let mut modes = vec![FooMode::Bar, FooMode::Foo];
            let flag = EnumSliceFlag::new_slice(
                &mut modes,
                "modes",
                foo_mode_identifiers(),
                CaseSensitivity::Insensitive,
            );
            assert_eq!(flag.to_string(), "[bar,foo]");
            assert_eq!(flag.type_name(), "modes");
            assert_eq!(FlagValue::kind(&flag), BindingKind::Slice);
        }

        #[test]
        fn test_replaces_then_merges() {
            let mut modes = vec![FooMode::Foo, FooMode::Bar];
            let mut flag = EnumSliceFlag::new_slice(
                &mut modes,
                "mode",
                foo_mode_identifiers(),
                CaseSensitivity::Insensitive,
            );
            flag.set("baz").unwrap();
            assert_eq!(flag.to_string(), "[baz]");
            flag.set("baz").unwrap();
            assert_eq!(flag.to_string(), "[baz]");
            flag.set("foo").unwrap();
            assert_eq!(flag.to_string(), "[baz,foo]");
            flag.set("foo,bar,baz").unwrap();
            assert_eq!(flag.to_string(), "[baz,foo,bar]");
            assert_eq!(
                modes,
                vec![FooMode::Baz, FooMode::Foo, FooMode::Bar]
            );
        }

        #[test]
        fn test_completor_follows_case_policy() {
            let mut modes = Vec::new();
            let flag = EnumSliceFlag::new_slice(
                &mut modes,
                "modes",
                EnumIdentifiers::new().with(1_u8, ["foo"]).with(2_u8, ["bar"]),
                CaseSensitivity::Insensitive,
            );
            let values: Vec<String> = flag
                .completor(&EnumHelp::new())
                .suggest("FOO,")
                .candidates
                .into_iter()
                .map(|candidate| candidate.value)
                .collect();
            assert_eq!(values, ["FOO,bar"]);
        }

        #[test]
        fn test_rejects_invalid_values() {
            let mut modes = Vec::new();
            let mut flag = EnumSliceFlag::new_slice(
                &mut modes,
                "mode",
                foo_mode_identifiers(),
                CaseSensitivity::Sensitive,
            );
            let err = flag.set("FOOBAR").unwrap_err();
            assert_eq!(err.to_string(), "must be 'bar'/'Bar', 'baz', 'foo'");
            assert!(flag.get().is_empty());
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn test_try_new_rejects_empty_mapping() {
            let mut mode = FooMode::Foo;
            let err = EnumFlag::try_new(
                &mut mode,
                "mode",
                EnumIdentifiers::new(),
                CaseSensitivity::Insensitive,
            )
            .unwrap_err();
            assert_eq!(
                err,
                Error::InvalidConstruction(
                    "EnumFlag::new requires mapping not to be empty".to_string()
                )
            );

            let mut modes: Vec<FooMode> = Vec::new();
            let err = EnumSliceFlag::try_new_slice(
                &mut modes,
                "modes",
                EnumIdentifiers::new(),
                CaseSensitivity::Insensitive,
            )
            .unwrap_err();
            assert!(!err.is_recoverable());
        }

        #[test]
        #[should_panic(expected = "EnumFlag::new requires mapping not to be empty")]
        fn test_new_panics_on_empty_mapping() {
            let mut mode = FooMode::Foo;
            let _ = EnumFlag::new(
                &mut mode,
                "mode",
                EnumIdentifiers::new(),
                CaseSensitivity::Insensitive,
            );
        }

        #[test]
        #[should_panic(expected = "EnumFlag::new_without_default requires mapping not to be empty")]
        fn test_new_without_default_panics_on_empty_mapping() {
            let mut mode = FooMode::Foo;
            let _ = EnumFlag::new_without_default(
                &mut mode,
                "mode",
                EnumIdentifiers::new(),
                CaseSensitivity::Insensitive,
            );
        }

        #[test]
        #[should_panic(expected = "EnumSliceFlag::new_slice requires mapping not to be empty")]
        fn test_new_slice_panics_on_empty_mapping() {
            let mut modes: Vec<FooMode> = Vec::new();
            let _ = EnumSliceFlag::new_slice(
                &mut modes,
                "modes",
                EnumIdentifiers::new(),
                CaseSensitivity::Insensitive,
            );
        }
    }

    mod self_describing {
        use super::*;

        impl EnumFlagType for FooMode {
            const TYPE_NAME: &'static str = "FooMode";
            const SENSITIVITY: CaseSensitivity = CaseSensitivity::Sensitive;

            fn identifiers() -> EnumIdentifiers<Self> {
                foo_mode_identifiers()
            }
        }

        #[test]
        fn test_for_type() {
            let mut mode = FooMode::Foo;
            let mut flag = EnumFlag::for_type(&mut mode);
            assert_eq!(flag.type_name(), "FooMode");
            assert!(flag.mapper().sensitivity().is_sensitive());
            assert!(flag.set("BAR").is_err());
            flag.set("Bar").unwrap();
            assert_eq!(mode, FooMode::Bar);
        }

        #[test]
        fn test_for_type_slice() {
            let mut modes = vec![FooMode::Foo];
            let mut flag = EnumSliceFlag::for_type_slice(&mut modes);
            flag.set("baz,bar").unwrap();
            assert_eq!(flag.to_string(), "[baz,bar]");
            assert!(FooMode::help().get(FooMode::Foo).is_none());
        }
    }

    #[test]
    fn test_dyn_flag_values() {
        let mut mode = FooMode::Foo;
        let mut modes = Vec::new();
        let mut scalar = EnumFlag::new(
            &mut mode,
            "mode",
            foo_mode_identifiers(),
            CaseSensitivity::Insensitive,
        );
        let mut slice = EnumSliceFlag::new_slice(
            &mut modes,
            "modes",
            foo_mode_identifiers(),
            CaseSensitivity::Insensitive,
        );
        let flags: [&mut dyn FlagValue; 2] = [&mut scalar, &mut slice];
        for flag in flags {
            flag.set("baz").unwrap();
        }
        assert_eq!(scalar.to_string(), "baz");
        assert_eq!(slice.to_string(), "[baz]");
    }
}
