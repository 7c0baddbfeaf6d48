//! Declared ancestor references and their type arguments.
//!
//! These mirror what a declaration says, not what it means: `class A
//! implements Repo<User, T>` is a `Parameterized` reference to `Repo` with
//! one concrete and one non-concrete argument.

use genbind_common::DefId;
use std::fmt;
use std::sync::Arc;

/// A single argument of a parameterized ancestor reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeArgument {
    /// A fully reified type.
    Concrete(DefId),
    /// A type variable, wildcard, or anything else that has no single
    /// concrete type behind it.
    NonConcrete(NonConcreteKind),
}

/// Why an argument is not concrete. Only used for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NonConcreteKind {
    /// A type parameter of the declaring type, e.g. `T` in `class A<T> implements Repo<T>`.
    TypeVariable(Arc<str>),
    /// `?`
    Wildcard,
}

impl fmt::Display for NonConcreteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeVariable(name) => f.write_str(name),
            Self::Wildcard => f.write_str("?"),
        }
    }
}

impl TypeArgument {
    pub const fn concrete(id: DefId) -> Self {
        Self::Concrete(id)
    }

    pub fn type_variable(name: impl Into<Arc<str>>) -> Self {
        Self::NonConcrete(NonConcreteKind::TypeVariable(name.into()))
    }

    pub const fn wildcard() -> Self {
        Self::NonConcrete(NonConcreteKind::Wildcard)
    }
}

/// `Ancestor<Arg0, Arg1, ...>` as written in a declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParameterizedRef {
    /// The generic ancestor being referenced.
    pub raw: DefId,
    /// Type arguments in declaration order.
    pub args: Vec<TypeArgument>,
}

impl ParameterizedRef {
    pub const fn new(raw: DefId, args: Vec<TypeArgument>) -> Self {
        Self { raw, args }
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

/// A directly declared superclass or interface.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AncestorRef {
    /// Declared without type arguments (`implements Marker`).
    Raw(DefId),
    /// Declared with type arguments (`implements Repo<User>`).
    Parameterized(ParameterizedRef),
}

impl AncestorRef {
    pub const fn raw(id: DefId) -> Self {
        Self::Raw(id)
    }

    pub const fn parameterized(raw: DefId, args: Vec<TypeArgument>) -> Self {
        Self::Parameterized(ParameterizedRef::new(raw, args))
    }

    /// The referenced type, with or without arguments.
    pub const fn target(&self) -> DefId {
        match self {
            Self::Raw(id) => *id,
            Self::Parameterized(r) => r.raw,
        }
    }

    pub const fn as_parameterized(&self) -> Option<&ParameterizedRef> {
        match self {
            Self::Raw(_) => None,
            Self::Parameterized(r) => Some(r),
        }
    }
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod tests;
