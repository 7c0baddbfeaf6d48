//! Type identities.
//!
//! A `DefId` is an opaque handle to a declared class or interface. It is
//! allocated by whatever store owns the type metadata and is only ever
//! compared, hashed, or handed back to that store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a declared type (class or interface).
///
/// `DefId`s are cheap to copy and usable as map keys. They carry no name;
/// ask the owning metadata view for one when a message needs it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DefId(pub u32);

impl DefId {
    /// First `DefId` handed out by a store; 0 is never allocated.
    pub const FIRST_VALID: u32 = 1;
}

impl fmt::Display for DefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of a declared type.
///
/// The kind of the *ancestor* decides which declared references the
/// resolver looks at: implemented interfaces for `Interface`, the
/// superclass for `Class`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// `class Foo extends Base<..> implements Iface<..>`
    Class,
    /// `interface Foo extends Iface<..>`
    Interface,
}

impl TypeKind {
    pub const fn is_interface(self) -> bool {
        matches!(self, Self::Interface)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
        }
    }
}

#[cfg(test)]
#[path = "../tests/def_tests.rs"]
mod tests;
