//! Generic Type-Binding Resolver
//!
//! Given a concrete type and a generic interface or superclass it declares,
//! recovers the concrete type bound to one of that ancestor's parameters by
//! reading declared type metadata:
//!
//! ```text
//! class UserRepo implements Repository<User, Long>
//!
//! resolve(UserRepo, Repository, 0) == User
//! resolve(UserRepo, Repository, 1) == Long
//! ```
//!
//! Only references declared directly on the subtype are inspected. When the
//! binding lives one level up (`UserRepo extends BaseRepo`, `BaseRepo
//! implements Repository<User>`), resolution fails and names `BaseRepo` as
//! the type to resolve from instead.
//!
//! - **Metadata**: supplied through [`TypeMetadataView`]; [`TypeTable`] is the
//!   in-memory implementation
//! - **Caching**: results are memoized per `(subtype, ancestor, index)` in a
//!   concurrent [`ResolutionCache`]
mod cache;
mod error;
mod resolver;
mod table;
pub mod types;
mod view;

pub use cache::{CacheStats, ResolutionCache, ResolutionKey};
pub use error::{NamedType, ResolveError};
pub use resolver::BindingResolver;
pub use table::{TypeDefinition, TypeTable};
pub use types::{AncestorRef, NonConcreteKind, ParameterizedRef, TypeArgument};
pub use view::TypeMetadataView;

pub use genbind_common::{DefId, TypeKind};
