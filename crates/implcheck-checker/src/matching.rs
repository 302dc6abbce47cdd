//! Signature matching between an interface method and a marked method.
//!
//! Matching is asymmetric. The interface side may use free type variables,
//! which match any descriptor at that position; the marked method must be
//! fully concrete to match a concrete interface position.

use implcheck_graph::{MethodSignature, TypeDescriptor, TypeGraph};

/// Does `interface_method` match the marked method `asserted`?
///
/// Names must be equal, the return types must match and the parameter lists
/// must match position by position.
pub fn signatures_match<G: TypeGraph + ?Sized>(
    graph: &G,
    interface_method: &MethodSignature,
    asserted: &MethodSignature,
) -> bool {
    interface_method.name == asserted.name
        && descriptor_matches(graph, &interface_method.return_type, &asserted.return_type)
        && parameters_match(graph, &interface_method.params, &asserted.params)
}

/// A single slot: wildcard if the interface declares a type variable there,
/// identity otherwise.
pub fn descriptor_matches<G: TypeGraph + ?Sized>(
    graph: &G,
    interface_ty: &TypeDescriptor,
    asserted_ty: &TypeDescriptor,
) -> bool {
    graph.is_free_type_variable(interface_ty) || interface_ty.is_identical(asserted_ty)
}

pub fn parameters_match<G: TypeGraph + ?Sized>(
    graph: &G,
    interface_params: &[TypeDescriptor],
    asserted_params: &[TypeDescriptor],
) -> bool {
    interface_params.len() == asserted_params.len()
        && interface_params
            .iter()
            .zip(asserted_params)
            .all(|(iface, asserted)| descriptor_matches(graph, iface, asserted))
}

#[cfg(test)]
#[path = "tests/matching_tests.rs"]
mod tests;
