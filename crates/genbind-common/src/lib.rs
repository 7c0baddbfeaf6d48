//! Common types and utilities for the genbind type-binding resolver.
//!
//! This crate provides foundational types used across all genbind crates:
//! - Type identities (`DefId`) and declaration kinds (`TypeKind`)
//! - Diagnostic codes, message templates and `format_message`

// Type identities handed out by metadata stores
pub mod def;
pub use def::{DefId, TypeKind};

// Diagnostic message table for resolution failures
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticMessage, format_message};
