//! Binding resolution.

use crate::cache::{ResolutionCache, ResolutionKey};
use crate::error::{NamedType, ResolveError};
use crate::types::{AncestorRef, ParameterizedRef, TypeArgument};
use crate::view::TypeMetadataView;
use genbind_common::DefId;
use tracing::debug;

/// Resolves the concrete type bound to a generic ancestor's parameter.
///
/// Only references declared directly on the subtype are considered. If the
/// subtype reaches the ancestor through some other declared type, the
/// request fails with [`ResolveError::Ambiguous`] naming that type rather
/// than walking further.
///
/// ```ignore
/// let resolver = BindingResolver::new(&table);
/// assert_eq!(resolver.resolve(user_repo, repository, 0)?, user);
/// ```
pub struct BindingResolver<V> {
    view: V,
    cache: ResolutionCache,
}

impl<V: TypeMetadataView> BindingResolver<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            cache: ResolutionCache::new(),
        }
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    pub const fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    /// The concrete type `subtype` binds to parameter `param_index` of `ancestor`.
    ///
    /// Successful results are cached for the lifetime of the resolver.
    pub fn resolve(
        &self,
        subtype: DefId,
        ancestor: DefId,
        param_index: usize,
    ) -> Result<DefId, ResolveError> {
        let key = ResolutionKey::new(subtype, ancestor, param_index);
        self.cache.get_or_compute(key, || self.compute(key))
    }

    fn compute(&self, key: ResolutionKey) -> Result<DefId, ResolveError> {
        let ancestor_is_interface = self.view.is_interface(key.ancestor);
        let declared = self.declared_candidates(key.subtype, ancestor_is_interface);

        let Some(matched) = parameterized(&declared).find(|r| r.raw == key.ancestor) else {
            return Err(self.missing_ancestor_error(key, &declared, ancestor_is_interface));
        };

        let Some(argument) = matched.args.get(key.param_index) else {
            return Err(ResolveError::IndexOutOfRange {
                subtype: self.named(key.subtype),
                ancestor: self.named(key.ancestor),
                index: key.param_index,
                arity: matched.arity(),
            });
        };

        match argument {
            TypeArgument::Concrete(resolved) => {
                debug!(
                    subtype = %self.view.type_name(key.subtype),
                    ancestor = %self.view.type_name(key.ancestor),
                    index = key.param_index,
                    resolved = %self.view.type_name(*resolved),
                    "resolved generic binding"
                );
                Ok(*resolved)
            }
            TypeArgument::NonConcrete(kind) => Err(ResolveError::UnsupportedDynamicParameter {
                subtype: self.named(key.subtype),
                ancestor: self.named(key.ancestor),
                index: key.param_index,
                argument: kind.clone(),
            }),
        }
    }

    /// References declared on `subtype` that can name an ancestor of the requested kind.
    fn declared_candidates(&self, subtype: DefId, ancestor_is_interface: bool) -> Vec<AncestorRef> {
        if ancestor_is_interface {
            self.view.declared_interface_ancestors(subtype)
        } else {
            self.view
                .declared_superclass_ancestor(subtype)
                .into_iter()
                .collect()
        }
    }

    /// Build the error for a subtype that does not declare the ancestor itself.
    ///
    /// Only declared references are candidates: a declared reference (or, for
    /// interface ancestors, the declared superclass) that descends from the
    /// ancestor is reported as the intermediate to resolve from, however far
    /// above it the ancestor sits.
    fn missing_ancestor_error(
        &self,
        key: ResolutionKey,
        declared: &[AncestorRef],
        ancestor_is_interface: bool,
    ) -> ResolveError {
        let superclass = if ancestor_is_interface {
            self.view.declared_superclass_ancestor(key.subtype)
        } else {
            None
        };

        // Raw references count here: `Sub extends Mid` names `Mid` even
        // though only parameterized references can match.
        let intermediate = declared
            .iter()
            .chain(superclass.as_ref())
            .map(AncestorRef::target)
            .find(|&target| self.view.is_ancestor_of(key.ancestor, target));

        debug!(
            subtype = %self.view.type_name(key.subtype),
            ancestor = %self.view.type_name(key.ancestor),
            intermediate = ?intermediate.map(|id| self.view.type_name(id)),
            "ancestor not declared directly"
        );

        match intermediate {
            Some(intermediate) => ResolveError::Ambiguous {
                subtype: self.named(key.subtype),
                intermediate: self.named(intermediate),
                ancestor: self.named(key.ancestor),
            },
            None => ResolveError::NotDirectAncestor {
                subtype: self.named(key.subtype),
                ancestor: self.named(key.ancestor),
            },
        }
    }

    fn named(&self, id: DefId) -> NamedType {
        NamedType::new(&self.view, id)
    }
}

fn parameterized(refs: &[AncestorRef]) -> impl Iterator<Item = &ParameterizedRef> {
    refs.iter().filter_map(AncestorRef::as_parameterized)
}

#[cfg(test)]
#[path = "../tests/resolver_tests.rs"]
mod tests;
