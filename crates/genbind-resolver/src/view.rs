//! Read-only access to declared type metadata.

use crate::types::AncestorRef;
use genbind_common::DefId;
use std::sync::Arc;

/// Declared type metadata, as seen by the resolver.
///
/// Implementations must be pure: the same question always gets the same
/// answer for the lifetime of the view, since resolved bindings are cached
/// forever.
pub trait TypeMetadataView {
    /// Whether `id` names an interface (as opposed to a class).
    ///
    /// Unknown ids should report `false`.
    fn is_interface(&self, id: DefId) -> bool;

    /// Interfaces declared directly on `subtype`, in declaration order.
    /// May contain `AncestorRef::Raw` entries.
    fn declared_interface_ancestors(&self, subtype: DefId) -> Vec<AncestorRef>;

    /// The superclass declared directly on `subtype`, if any.
    fn declared_superclass_ancestor(&self, subtype: DefId) -> Option<AncestorRef>;

    /// Whether `candidate` is a direct or transitive supertype or interface
    /// of `target`. A type is not its own ancestor.
    fn is_ancestor_of(&self, candidate: DefId, target: DefId) -> bool;

    /// Display name of `id`, for diagnostics.
    fn type_name(&self, id: DefId) -> String;
}

impl<V: TypeMetadataView + ?Sized> TypeMetadataView for &V {
    fn is_interface(&self, id: DefId) -> bool {
        (**self).is_interface(id)
    }

    fn declared_interface_ancestors(&self, subtype: DefId) -> Vec<AncestorRef> {
        (**self).declared_interface_ancestors(subtype)
    }

    fn declared_superclass_ancestor(&self, subtype: DefId) -> Option<AncestorRef> {
        (**self).declared_superclass_ancestor(subtype)
    }

    fn is_ancestor_of(&self, candidate: DefId, target: DefId) -> bool {
        (**self).is_ancestor_of(candidate, target)
    }

    fn type_name(&self, id: DefId) -> String {
        (**self).type_name(id)
    }
}

impl<V: TypeMetadataView + ?Sized> TypeMetadataView for Arc<V> {
    fn is_interface(&self, id: DefId) -> bool {
        (**self).is_interface(id)
    }

    fn declared_interface_ancestors(&self, subtype: DefId) -> Vec<AncestorRef> {
        (**self).declared_interface_ancestors(subtype)
    }

    fn declared_superclass_ancestor(&self, subtype: DefId) -> Option<AncestorRef> {
        (**self).declared_superclass_ancestor(subtype)
    }

    fn is_ancestor_of(&self, candidate: DefId, target: DefId) -> bool {
        (**self).is_ancestor_of(candidate, target)
    }

    fn type_name(&self, id: DefId) -> String {
        (**self).type_name(id)
    }
}
