//! Type declaration graph for the contract checker.
//!
//! This crate is the read-only view the checker consumes:
//!
//! - **`DefId` / `DefinitionStore`**: arena of declared classes and interfaces
//!   with their superclass and super-interface edges
//! - **`TypeDescriptor` / `MethodSignature`**: method shapes as declared
//! - **`TypeGraph`**: the accessor trait the validator is written against
//! - **`hierarchy`**: inheritance cycle detection over any `TypeGraph`
//!
//! The graph is populated eagerly (by a manifest loader or by tests) and is
//! never mutated while contracts are being checked.

pub mod def;
mod format;
mod graph;
pub mod hierarchy;
pub mod types;

pub use def::{DefId, DefKind, DefinitionInfo, DefinitionStore};
pub use format::TypeFormatter;
pub use graph::TypeGraph;
pub use hierarchy::find_inheritance_cycle;
pub use types::{MethodDecl, MethodSignature, PrimitiveKind, TypeDescriptor};
