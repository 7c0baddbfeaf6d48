//! Table-wide binding check.
//!
//! For every type in a table, every parameterized ancestor it declares
//! directly is resolved at every parameter position. Successful bindings and
//! failures are collected into a report.

use genbind_common::{DefId, Diagnostic};
use genbind_resolver::{BindingResolver, TypeMetadataView, TypeTable};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::fmt::Write as _;

/// One resolved binding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub subtype: String,
    pub ancestor: String,
    pub param_index: usize,
    pub resolved: String,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct CheckReport {
    pub bindings: Vec<Binding>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// One line per binding, then one line per diagnostic.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for b in &self.bindings {
            let _ = writeln!(
                out,
                "{} -> {}[{}] = {}",
                b.subtype, b.ancestor, b.param_index, b.resolved
            );
        }
        for d in &self.diagnostics {
            let _ = writeln!(out, "error[GB{}]: {}", d.code, d.message_text);
        }
        out
    }
}

/// Resolve every directly declared binding of `resolver`'s table.
pub fn check_table(resolver: &BindingResolver<&TypeTable>) -> CheckReport {
    let table = *resolver.view();
    let mut report = CheckReport::default();

    for subtype in table.all_ids() {
        let Some(def) = table.get(subtype) else {
            continue;
        };
        let mut seen: FxHashSet<(DefId, usize)> = FxHashSet::default();
        for reference in def.direct_ancestors() {
            let Some(params) = reference.as_parameterized() else {
                continue;
            };
            for index in 0..params.arity() {
                if !seen.insert((params.raw, index)) {
                    continue;
                }
                match resolver.resolve(subtype, params.raw, index) {
                    Ok(resolved) => report.bindings.push(Binding {
                        subtype: table.type_name(subtype),
                        ancestor: table.type_name(params.raw),
                        param_index: index,
                        resolved: table.type_name(resolved),
                    }),
                    Err(err) => report.diagnostics.push(err.to_diagnostic()),
                }
            }
        }
    }

    report
}
