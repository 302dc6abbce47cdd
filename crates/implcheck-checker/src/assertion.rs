use implcheck_graph::{DefId, MethodSignature};

/// One method-to-interface obligation.
///
/// `method` is declared inside `enclosing` and claims to implement a method
/// of `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractAssertion {
    pub enclosing: DefId,
    pub method: MethodSignature,
    pub target: DefId,
}

impl ContractAssertion {
    pub const fn new(enclosing: DefId, method: MethodSignature, target: DefId) -> Self {
        Self {
            enclosing,
            method,
            target,
        }
    }
}
