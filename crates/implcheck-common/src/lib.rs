//! Common types and utilities for the implcheck contract checker.
//!
//! This crate provides foundational types used across all implcheck crates:
//! - String interning (`Atom`, `Interner`)
//! - Diagnostics (`Diagnostic`, message table, `format_message`)
//! - Traversal limits

// String interning for type and method names
pub mod interner;
pub use interner::{Atom, Interner};

// Diagnostic types and the message table
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticRelatedInformation, diagnostic_codes,
    diagnostic_messages, format_message,
};

// Centralized limits and thresholds
pub mod limits;
