//! In-memory type metadata.
//!
//! `TypeTable` is a registration-time table of declared classes and
//! interfaces. Hosts without runtime reflection fill one from generated code
//! (or a table file) and hand it to the resolver as its `TypeMetadataView`.
//!
//! ## Usage
//!
//! ```ignore
//! let table = TypeTable::new();
//! let user = table.register(TypeDefinition::class("User"));
//! let repo = table.register(TypeDefinition::interface("Repository").with_type_params(["T"]));
//! let user_repo = table.register(
//!     TypeDefinition::class("UserRepo")
//!         .with_interfaces(vec![AncestorRef::parameterized(repo, vec![TypeArgument::concrete(user)])]),
//! );
//! ```

use crate::types::AncestorRef;
use crate::view::TypeMetadataView;
use dashmap::DashMap;
use genbind_common::{DefId, TypeKind};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::trace;

// =============================================================================
// TypeDefinition - Stored Declaration Data
// =============================================================================

/// Everything the resolver needs to know about one declared type.
#[derive(Clone, Debug)]
pub struct TypeDefinition {
    pub kind: TypeKind,

    /// Name of the type (for diagnostics and lookup)
    pub name: Arc<str>,

    /// Declared type parameter names, e.g. `["T", "ID"]`
    pub type_params: Vec<Arc<str>>,

    /// For classes: the declared superclass (if extends)
    pub superclass: Option<AncestorRef>,

    /// Implemented interfaces (classes) or extended interfaces (interfaces)
    pub interfaces: Vec<AncestorRef>,
}

impl TypeDefinition {
    /// Create a new class definition.
    pub fn class(name: impl Into<Arc<str>>) -> Self {
        Self::new(TypeKind::Class, name)
    }

    /// Create a new interface definition.
    pub fn interface(name: impl Into<Arc<str>>) -> Self {
        Self::new(TypeKind::Interface, name)
    }

    pub fn new(kind: TypeKind, name: impl Into<Arc<str>>) -> Self {
        Self {
            kind,
            name: name.into(),
            type_params: Vec::new(),
            superclass: None,
            interfaces: Vec::new(),
        }
    }

    pub fn with_type_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        self.type_params = params.into_iter().map(Into::into).collect();
        self
    }

    /// Set the extends parent.
    pub fn with_superclass(mut self, parent: AncestorRef) -> Self {
        self.superclass = Some(parent);
        self
    }

    /// Set implemented interfaces.
    pub fn with_interfaces(mut self, interfaces: Vec<AncestorRef>) -> Self {
        self.interfaces = interfaces;
        self
    }

    /// Directly declared ancestors: superclass first, then interfaces.
    pub fn direct_ancestors(&self) -> impl Iterator<Item = &AncestorRef> {
        self.superclass.iter().chain(self.interfaces.iter())
    }
}

// =============================================================================
// TypeTable - Storage for Declarations
// =============================================================================

/// Thread-safe storage for type declarations.
///
/// Uses `DashMap` so a table can be filled and queried from several threads.
/// Ancestors may be wired after registration (`set_superclass`,
/// `set_interfaces`) to allow forward references; once a table is handed to
/// a resolver it must not change.
#[derive(Debug)]
pub struct TypeTable {
    /// `DefId` -> `TypeDefinition` mapping
    definitions: DashMap<DefId, TypeDefinition>,

    /// Name -> `DefId` mapping for lookup
    names: DashMap<Arc<str>, DefId>,

    /// Next available `DefId`
    next_id: AtomicU32,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeTable {
    pub fn new() -> Self {
        Self {
            definitions: DashMap::new(),
            names: DashMap::new(),
            next_id: AtomicU32::new(DefId::FIRST_VALID),
        }
    }

    fn allocate(&self) -> DefId {
        DefId(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Register a new declaration and return its `DefId`.
    ///
    /// Names are not required to be unique; `lookup` returns the most
    /// recently registered type of a given name.
    pub fn register(&self, def: TypeDefinition) -> DefId {
        let id = self.allocate();
        trace!(
            def_id = %id.0,
            name = %def.name,
            kind = def.kind.as_str(),
            "TypeTable::register"
        );
        self.names.insert(def.name.clone(), id);
        self.definitions.insert(id, def);
        id
    }

    /// Get a declaration by `DefId`.
    pub fn get(&self, id: DefId) -> Option<TypeDefinition> {
        self.definitions.get(&id).map(|r| r.clone())
    }

    /// Find a type by name.
    pub fn lookup(&self, name: &str) -> Option<DefId> {
        self.names.get(name).map(|r| *r)
    }

    pub fn get_kind(&self, id: DefId) -> Option<TypeKind> {
        self.definitions.get(&id).map(|r| r.kind)
    }

    pub fn get_name(&self, id: DefId) -> Option<Arc<str>> {
        self.definitions.get(&id).map(|r| r.name.clone())
    }

    /// Update the declared superclass of a type.
    pub fn set_superclass(&self, id: DefId, parent: Option<AncestorRef>) {
        if let Some(mut entry) = self.definitions.get_mut(&id) {
            entry.superclass = parent;
        }
    }

    /// Update the declared interfaces of a type.
    pub fn set_interfaces(&self, id: DefId, interfaces: Vec<AncestorRef>) {
        if let Some(mut entry) = self.definitions.get_mut(&id) {
            entry.interfaces = interfaces;
        }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// All registered ids, in allocation order.
    pub fn all_ids(&self) -> Vec<DefId> {
        let mut ids: Vec<DefId> = self.definitions.iter().map(|r| *r.key()).collect();
        ids.sort_unstable();
        ids
    }

    fn direct_ancestor_ids(&self, id: DefId) -> Vec<DefId> {
        self.definitions
            .get(&id)
            .map(|r| r.direct_ancestors().map(AncestorRef::target).collect())
            .unwrap_or_default()
    }
}

impl TypeMetadataView for TypeTable {
    fn is_interface(&self, id: DefId) -> bool {
        self.get_kind(id).is_some_and(TypeKind::is_interface)
    }

    fn declared_interface_ancestors(&self, subtype: DefId) -> Vec<AncestorRef> {
        self.definitions
            .get(&subtype)
            .map(|r| r.interfaces.clone())
            .unwrap_or_default()
    }

    fn declared_superclass_ancestor(&self, subtype: DefId) -> Option<AncestorRef> {
        self.definitions
            .get(&subtype)
            .and_then(|r| r.superclass.clone())
    }

    fn is_ancestor_of(&self, candidate: DefId, target: DefId) -> bool {
        // Breadth-first over declared edges; the visited set keeps malformed
        // (cyclic) tables from looping.
        let mut visited = FxHashSet::default();
        let mut queue: VecDeque<DefId> = self.direct_ancestor_ids(target).into();
        while let Some(current) = queue.pop_front() {
            if current == candidate {
                return true;
            }
            if visited.insert(current) {
                queue.extend(self.direct_ancestor_ids(current));
            }
        }
        false
    }

    fn type_name(&self, id: DefId) -> String {
        self.get_name(id)
            .map(|name| name.to_string())
            .unwrap_or_else(|| format!("<unknown {id}>"))
    }
}

#[cfg(test)]
#[path = "../tests/table_tests.rs"]
mod tests;
