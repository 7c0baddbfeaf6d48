//! JSON type tables.
//!
//! ```json
//! {
//!   "types": [
//!     { "name": "Repository", "kind": "interface", "type_params": ["T", "ID"] },
//!     { "name": "UserRepo", "kind": "class",
//!       "implements": [ { "name": "Repository", "args": ["User", "Long"] } ] }
//!   ]
//! }
//! ```
//!
//! An ancestor without `args` is a raw reference. Each argument is `"?"` (a
//! wildcard), one of the declaring type's `type_params` (a type variable), or
//! the name of a declared type.

use anyhow::{Context, Result, bail};
use genbind_common::{DefId, TypeKind};
use genbind_resolver::{AncestorRef, TypeArgument, TypeDefinition, TypeTable};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const WILDCARD: &str = "?";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableFile {
    pub types: Vec<TypeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeEntry {
    pub name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub type_params: Vec<String>,
    #[serde(default)]
    pub extends: Option<AncestorEntry>,
    #[serde(default)]
    pub implements: Vec<AncestorEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AncestorEntry {
    pub name: String,
    #[serde(default)]
    pub args: Option<Vec<String>>,
}

/// Read and build a type table from `path`.
pub fn load_table(path: &Path) -> Result<TypeTable> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read type table {}", path.display()))?;
    parse_table(&source).with_context(|| format!("invalid type table {}", path.display()))
}

/// Parse and build a type table from JSON source.
pub fn parse_table(source: &str) -> Result<TypeTable> {
    let file: TableFile = serde_json::from_str(source).context("failed to parse JSON")?;
    build_table(&file)
}

/// Register every entry, then wire ancestors so declarations may refer to
/// types that appear later in the file.
pub fn build_table(file: &TableFile) -> Result<TypeTable> {
    let table = TypeTable::new();
    let mut ids: FxHashMap<&str, DefId> = FxHashMap::default();

    for entry in &file.types {
        if ids.contains_key(entry.name.as_str()) {
            bail!("type '{}' is declared more than once", entry.name);
        }
        let id = table.register(
            TypeDefinition::new(entry.kind, entry.name.as_str())
                .with_type_params(entry.type_params.iter().map(String::as_str)),
        );
        ids.insert(entry.name.as_str(), id);
    }

    for entry in &file.types {
        let id = ids[entry.name.as_str()];
        if let Some(parent) = &entry.extends {
            if entry.kind.is_interface() {
                bail!(
                    "interface '{}' cannot declare a superclass; list extended interfaces under \"implements\"",
                    entry.name
                );
            }
            let superclass = ancestor_ref(entry, parent, &ids)?;
            expect_kind(&table, entry, parent, superclass.target(), TypeKind::Class)?;
            table.set_superclass(id, Some(superclass));
        }
        let interfaces = entry
            .implements
            .iter()
            .map(|iface| {
                let reference = ancestor_ref(entry, iface, &ids)?;
                expect_kind(&table, entry, iface, reference.target(), TypeKind::Interface)?;
                Ok(reference)
            })
            .collect::<Result<Vec<_>>>()?;
        table.set_interfaces(id, interfaces);
    }

    debug!(types = table.len(), "loaded type table");
    Ok(table)
}

/// `extends` must name a class and `implements` must name interfaces.
fn expect_kind(
    table: &TypeTable,
    owner: &TypeEntry,
    ancestor: &AncestorEntry,
    target: DefId,
    expected: TypeKind,
) -> Result<()> {
    let actual = table.get_kind(target);
    if actual != Some(expected) {
        let (clause, wanted) = match expected {
            TypeKind::Class => ("extends", "a class"),
            TypeKind::Interface => ("implements", "an interface"),
        };
        bail!(
            "type '{}' lists '{}' under \"{}\", but '{}' is not {}",
            owner.name,
            ancestor.name,
            clause,
            ancestor.name,
            wanted
        );
    }
    Ok(())
}

fn ancestor_ref(
    owner: &TypeEntry,
    ancestor: &AncestorEntry,
    ids: &FxHashMap<&str, DefId>,
) -> Result<AncestorRef> {
    let Some(&raw) = ids.get(ancestor.name.as_str()) else {
        bail!(
            "type '{}' declares unknown ancestor '{}'",
            owner.name,
            ancestor.name
        );
    };
    let Some(args) = &ancestor.args else {
        return Ok(AncestorRef::raw(raw));
    };
    let args = args
        .iter()
        .map(|arg| type_argument(owner, ancestor, arg, ids))
        .collect::<Result<Vec<_>>>()?;
    Ok(AncestorRef::parameterized(raw, args))
}

fn type_argument(
    owner: &TypeEntry,
    ancestor: &AncestorEntry,
    arg: &str,
    ids: &FxHashMap<&str, DefId>,
) -> Result<TypeArgument> {
    if arg == WILDCARD {
        return Ok(TypeArgument::wildcard());
    }
    if owner.type_params.iter().any(|param| param == arg) {
        return Ok(TypeArgument::type_variable(arg));
    }
    match ids.get(arg) {
        Some(&id) => Ok(TypeArgument::concrete(id)),
        None => bail!(
            "type '{}' passes unknown type argument '{}' to '{}'",
            owner.name,
            arg,
            ancestor.name
        ),
    }
}
