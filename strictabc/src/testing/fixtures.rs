//! Interface and candidate fixtures.

use std::sync::Arc;

use crate::contracts::{InterfaceType, Operation};
use crate::validator::{Member, SpecializationCandidate};

/// Builds an interface from `(name, parameter list)` pairs, all required.
///
/// # Panics
///
/// Panics if a name or parameter list is malformed.
#[must_use]
pub fn interface(name: &str, required: &[(&str, &str)]) -> Arc<InterfaceType> {
    let builder = required
        .iter()
        .fold(InterfaceType::builder(name), |builder, (op, params)| {
            let operation = Operation::parse(*op, params)
                .unwrap_or_else(|e| panic!("bad fixture operation {op}{params}: {e}"));
            builder.required(operation)
        });
    Arc::new(builder.build())
}

/// The `Foo` interface: `bar(self)` and `baz(self, a)`, both required.
#[must_use]
pub fn foo_interface_type() -> InterfaceType {
    Arc::unwrap_or_clone(interface("Foo", &[("bar", "(self)"), ("baz", "(self, a)")]))
}

/// A shared handle to a fresh `Foo` interface.
#[must_use]
pub fn foo_interface() -> Arc<InterfaceType> {
    Arc::new(foo_interface_type())
}

/// A candidate with the given interface bases and members.
#[must_use]
pub fn candidate(
    name: &str,
    bases: &[Arc<InterfaceType>],
    members: Vec<Member>,
) -> SpecializationCandidate {
    SpecializationCandidate::new(name)
        .with_bases(bases.iter().cloned())
        .with_members(members)
}

/// A candidate named `ConFoo` specializing a fresh `Foo`.
#[must_use]
pub fn con_foo(members: Vec<Member>) -> SpecializationCandidate {
    candidate("ConFoo", &[foo_interface()], members)
}
