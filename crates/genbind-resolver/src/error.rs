//! Resolution failures.
//!
//! Every variant carries the ids and display names of the types involved so
//! the message can be acted on without another lookup. Messages are rendered
//! from the templates in `genbind_common::diagnostics`.

use crate::types::NonConcreteKind;
use crate::view::TypeMetadataView;
use genbind_common::diagnostics::{diagnostic_codes, get_message_template};
use genbind_common::{DefId, Diagnostic, format_message};
use std::fmt;

/// A type identity together with the name it had when the error was raised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedType {
    pub id: DefId,
    pub name: String,
}

impl NamedType {
    pub fn new(view: &impl TypeMetadataView, id: DefId) -> Self {
        Self {
            id,
            name: view.type_name(id),
        }
    }
}

impl fmt::Display for NamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Why a binding could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// `subtype` does not directly extend or implement `ancestor`.
    NotDirectAncestor {
        subtype: NamedType,
        ancestor: NamedType,
    },
    /// `intermediate` is declared on `subtype` and itself descends from
    /// `ancestor`; the binding has to be resolved starting from there.
    Ambiguous {
        subtype: NamedType,
        intermediate: NamedType,
        ancestor: NamedType,
    },
    /// The matched type argument is a type variable or wildcard.
    UnsupportedDynamicParameter {
        subtype: NamedType,
        ancestor: NamedType,
        index: usize,
        argument: NonConcreteKind,
    },
    /// `index` is past the end of the matched reference's argument list.
    IndexOutOfRange {
        subtype: NamedType,
        ancestor: NamedType,
        index: usize,
        arity: usize,
    },
}

impl ResolveError {
    /// Diagnostic code of this failure.
    pub const fn code(&self) -> u32 {
        match self {
            Self::NotDirectAncestor { .. } => diagnostic_codes::NOT_A_DIRECT_ANCESTOR,
            Self::Ambiguous { .. } => diagnostic_codes::RESOLUTION_MUST_START_AT_INTERMEDIATE,
            Self::UnsupportedDynamicParameter { .. } => {
                diagnostic_codes::TYPE_ARGUMENT_IS_NOT_CONCRETE
            }
            Self::IndexOutOfRange { .. } => diagnostic_codes::PARAMETER_INDEX_OUT_OF_RANGE,
        }
    }

    pub const fn subtype(&self) -> &NamedType {
        match self {
            Self::NotDirectAncestor { subtype, .. }
            | Self::Ambiguous { subtype, .. }
            | Self::UnsupportedDynamicParameter { subtype, .. }
            | Self::IndexOutOfRange { subtype, .. } => subtype,
        }
    }

    pub const fn ancestor(&self) -> &NamedType {
        match self {
            Self::NotDirectAncestor { ancestor, .. }
            | Self::Ambiguous { ancestor, .. }
            | Self::UnsupportedDynamicParameter { ancestor, .. }
            | Self::IndexOutOfRange { ancestor, .. } => ancestor,
        }
    }

    /// Template arguments, in placeholder order.
    fn message_args(&self) -> Vec<String> {
        match self {
            Self::NotDirectAncestor { subtype, ancestor } => {
                vec![subtype.name.clone(), ancestor.name.clone()]
            }
            Self::Ambiguous {
                subtype,
                intermediate,
                ancestor,
            } => vec![
                subtype.name.clone(),
                intermediate.name.clone(),
                ancestor.name.clone(),
            ],
            Self::UnsupportedDynamicParameter {
                subtype,
                ancestor,
                index,
                argument,
            } => vec![
                subtype.name.clone(),
                index.to_string(),
                ancestor.name.clone(),
                argument.to_string(),
            ],
            Self::IndexOutOfRange {
                subtype,
                ancestor,
                index,
                arity,
            } => vec![
                subtype.name.clone(),
                ancestor.name.clone(),
                index.to_string(),
                arity.to_string(),
            ],
        }
    }

    /// The rendered message text.
    pub fn message(&self) -> String {
        let args = self.message_args();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match get_message_template(self.code()) {
            Some(template) => format_message(template, &args),
            None => format!("GB{}: {}", self.code(), args.join(", ")),
        }
    }

    /// Convert into a serializable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(
            self.code(),
            self.message(),
            &self.subtype().name,
            &self.ancestor().name,
        );
        match self {
            Self::Ambiguous { intermediate, .. } => diag.with_related(&intermediate.name),
            Self::UnsupportedDynamicParameter { index, .. }
            | Self::IndexOutOfRange { index, .. } => diag.with_param_index(*index),
            Self::NotDirectAncestor { .. } => diag,
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ResolveError {}
