//! Must-implement contract validation.
//!
//! A method marked with a target interface promises that it implements one of
//! that interface's methods. [`ContractValidator::validate`] checks such a
//! promise in three ordered steps:
//!
//! 1. the target is an interface,
//! 2. the enclosing type is a subtype of it (through any chain of
//!    superclasses and super-interfaces),
//! 3. the interface or one of its ancestors declares a matching method,
//!    where type variables on the interface side match any type.
//!
//! The validator only reads a [`TypeGraph`](implcheck_graph::TypeGraph).
//! Discovery of marked methods and conversion of violations into
//! diagnostics live in [`discovery`], [`diagnostics`] and [`driver`].

mod assertion;
pub mod diagnostics;
pub mod discovery;
pub mod driver;
pub mod matching;
mod options;
mod validator;
mod violation;

pub use assertion::ContractAssertion;
pub use discovery::{DiscoveredContract, collect_assertions};
pub use driver::{check_contracts, check_inheritance_cycles, check_program, validate_all};
pub use options::CheckerOptions;
pub use validator::ContractValidator;
pub use violation::{ContractViolation, ViolationKind};
