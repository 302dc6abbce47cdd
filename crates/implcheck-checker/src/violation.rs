use implcheck_graph::DefId;
use std::sync::Arc;
use thiserror::Error;

/// Why a contract assertion failed.
///
/// Variants are listed in check order; an assertion yields at most one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("{target_name} is not an interface")]
    NotAnInterface { target: DefId, target_name: Arc<str> },

    #[error("{enclosing_name} must implement {interface_name}")]
    DoesNotImplement {
        enclosing: DefId,
        enclosing_name: Arc<str>,
        interface: DefId,
        interface_name: Arc<str>,
    },

    #[error("{interface_name} doesn't have \"{method}\" method")]
    MissingMethod {
        interface: DefId,
        interface_name: Arc<str>,
        /// Method as written at the marked site, e.g. `area()`
        method: String,
    },
}

/// Fieldless discriminant of [`ContractViolation`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    NotAnInterface,
    DoesNotImplement,
    MissingMethod,
}

impl ContractViolation {
    pub const fn kind(&self) -> ViolationKind {
        match self {
            ContractViolation::NotAnInterface { .. } => ViolationKind::NotAnInterface,
            ContractViolation::DoesNotImplement { .. } => ViolationKind::DoesNotImplement,
            ContractViolation::MissingMethod { .. } => ViolationKind::MissingMethod,
        }
    }

    /// The contract target the violation is about.
    pub const fn target(&self) -> DefId {
        match self {
            ContractViolation::NotAnInterface { target, .. } => *target,
            ContractViolation::DoesNotImplement { interface, .. }
            | ContractViolation::MissingMethod { interface, .. } => *interface,
        }
    }
}
