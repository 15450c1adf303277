//! Shared fixtures for unit tests.

use crate::{EnumHelp, EnumIdentifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FooMode {
    Unmapped,
    Foo,
    Bar,
    Baz,
}

pub fn foo_mode_identifiers() -> EnumIdentifiers<FooMode> {
    EnumIdentifiers::new()
        .with(FooMode::Foo, ["foo"])
        .with(FooMode::Bar, ["bar", "Bar"])
        .with(FooMode::Baz, ["baz"])
}

pub fn foo_mode_help() -> EnumHelp<FooMode> {
    EnumHelp::new()
        .with(FooMode::Foo, "foo it")
        .with(FooMode::Bar, "bar IT!")
        .with(FooMode::Baz, "baz nit!!")
}
