//! Whole-program checking entry points.
//!
//! `check_program` is what front ends call: inheritance cycles are reported
//! first and, if there are none, every discovered contract is validated.

use crate::assertion::ContractAssertion;
use crate::diagnostics::{cycle_diagnostic, violation_diagnostic};
use crate::discovery::collect_assertions;
use crate::options::CheckerOptions;
use crate::validator::ContractValidator;
use crate::violation::ContractViolation;
use implcheck_common::Diagnostic;
use implcheck_graph::{DefinitionStore, TypeGraph, find_inheritance_cycle};
use tracing::{debug, info_span};

/// Validate `assertions` against `graph`, returning one result per assertion
/// in input order.
///
/// With `options.parallel` the work is spread over the rayon pool; results
/// are identical either way.
pub fn validate_all<G: TypeGraph + Sync + ?Sized>(
    graph: &G,
    assertions: &[ContractAssertion],
    options: &CheckerOptions,
) -> Vec<Result<(), ContractViolation>> {
    let validator = ContractValidator::new(graph).with_max_depth(options.max_hierarchy_depth);

    if options.parallel {
        use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
        assertions
            .par_iter()
            .map(|assertion| validator.validate(assertion))
            .collect()
    } else {
        assertions
            .iter()
            .map(|assertion| validator.validate(assertion))
            .collect()
    }
}

/// Validate every marked method in `store` and convert failures into
/// diagnostics, in discovery order.
pub fn check_contracts(store: &DefinitionStore, options: &CheckerOptions) -> Vec<Diagnostic> {
    let _span = info_span!("check_contracts", types = store.len()).entered();

    let contracts = collect_assertions(store);
    let assertions: Vec<ContractAssertion> = contracts
        .iter()
        .map(|contract| contract.assertion.clone())
        .collect();

    let diagnostics: Vec<Diagnostic> = validate_all(store, &assertions, options)
        .into_iter()
        .zip(&contracts)
        .filter_map(|(result, contract)| {
            result
                .err()
                .map(|violation| violation_diagnostic(store, contract, &violation, options))
        })
        .collect();

    debug!(
        contracts = contracts.len(),
        violations = diagnostics.len(),
        "contract check finished"
    );
    diagnostics
}

/// One circular-base diagnostic for every type that is its own ancestor.
pub fn check_inheritance_cycles(store: &DefinitionStore) -> Vec<Diagnostic> {
    store
        .all_ids()
        .into_iter()
        .filter(|&def| {
            let cycle = find_inheritance_cycle(store, def);
            if let Some(path) = &cycle {
                debug!(def = def.0, length = path.len(), "inheritance cycle");
            }
            cycle.is_some()
        })
        .map(|def| cycle_diagnostic(store, def))
        .collect()
}

/// Check a fully loaded program.
///
/// Contract checking is skipped when the hierarchy is cyclic; the cycle
/// diagnostics are returned instead.
pub fn check_program(store: &DefinitionStore, options: &CheckerOptions) -> Vec<Diagnostic> {
    let cycles = check_inheritance_cycles(store);
    if !cycles.is_empty() {
        return cycles;
    }
    check_contracts(store, options)
}
