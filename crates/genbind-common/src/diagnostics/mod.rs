//! Diagnostic types and message lookup for binding resolution.
//!
//! Message templates live in `data.rs` and use `{0}`, `{1}`, ... placeholders
//! filled in by [`format_message`].

use serde::Serialize;

mod data;
pub use data::{DIAGNOSTIC_MESSAGES, diagnostic_codes, diagnostic_messages};

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Error = 1,
}

/// A resolution diagnostic, already formatted.
///
/// `subtype` and `ancestor` are display names of the request that produced
/// it; `related` names any further type the message refers to (the
/// intermediate type of an ambiguous resolution).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message_text: String,
    pub subtype: String,
    pub ancestor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_index: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub fn error(
        code: u32,
        message: impl Into<String>,
        subtype: impl Into<String>,
        ancestor: impl Into<String>,
    ) -> Self {
        Self {
            code,
            category: DiagnosticCategory::Error,
            message_text: message.into(),
            subtype: subtype.into(),
            ancestor: ancestor.into(),
            param_index: None,
            related: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_param_index(mut self, index: usize) -> Self {
        self.param_index = Some(index);
        self
    }

    /// Add a related type name to this diagnostic.
    #[must_use]
    pub fn with_related(mut self, name: impl Into<String>) -> Self {
        self.related.push(name.into());
        self
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
///
/// The template is scanned once, so braces inside an argument are copied
/// through unchanged. Placeholders without a matching argument stay as they
/// are.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        rest = &rest[open..];
        let arg = rest[1..]
            .find('}')
            .and_then(|close| rest[1..=close].parse::<usize>().ok().map(|i| (i, close)))
            .and_then(|(i, close)| args.get(i).map(|arg| (arg, close)));
        match arg {
            Some((arg, close)) => {
                result.push_str(arg);
                rest = &rest[close + 2..];
            }
            None => {
                result.push('{');
                rest = &rest[1..];
            }
        }
    }
    result.push_str(rest);
    result
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

/// Get the message template for a diagnostic code.
///
/// Returns the template string with `{0}`, `{1}`, etc. placeholders.
/// Use `format_message()` to fill in the placeholders.
#[must_use]
pub fn get_message_template(code: u32) -> Option<&'static str> {
    get_diagnostic_message(code).map(|m| m.message)
}

#[cfg(test)]
#[path = "../../tests/diagnostics_tests.rs"]
mod tests;
