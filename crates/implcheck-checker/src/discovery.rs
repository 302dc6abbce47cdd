//! Discovery of marked methods.
//!
//! Every method declared with a contract target yields one
//! [`DiscoveredContract`]. Discovery order is deterministic: types in `DefId`
//! order, then methods in declaration order.

use crate::assertion::ContractAssertion;
use implcheck_common::Atom;
use implcheck_graph::DefinitionStore;

/// A contract assertion together with where it was written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveredContract {
    pub assertion: ContractAssertion,
    /// File of the enclosing type
    pub file: Option<Atom>,
    /// `(start, length)` of the marked method, if known
    pub span: Option<(u32, u32)>,
}

/// Collect every marked method in `store`.
pub fn collect_assertions(store: &DefinitionStore) -> Vec<DiscoveredContract> {
    let mut contracts = Vec::new();
    for enclosing in store.all_ids() {
        let Some(info) = store.get(enclosing) else {
            continue;
        };
        for decl in info.methods.iter() {
            let Some(target) = decl.contract else {
                continue;
            };
            contracts.push(DiscoveredContract {
                assertion: ContractAssertion::new(enclosing, decl.signature.clone(), target),
                file: info.file,
                span: decl.span,
            });
        }
    }
    tracing::debug!(count = contracts.len(), "collected contract assertions");
    contracts
}

#[cfg(test)]
#[path = "tests/discovery_tests.rs"]
mod tests;
