//! The contract validator.
//!
//! Both traversals are recursive walks over `DefId`s. Every step carries its
//! depth, and a walk that exceeds `max_depth` fails. Each walk also records
//! the shallowest depth at which it explored a node and skips later visits
//! at the same depth or deeper, so shared ancestors and cycles are explored
//! once per walk. Nothing is kept between walks.

use crate::assertion::ContractAssertion;
use crate::matching::signatures_match;
use crate::violation::ContractViolation;
use implcheck_common::limits::{MAX_HIERARCHY_DEPTH, STACK_GROWTH_SIZE, STACK_RED_ZONE};
use implcheck_graph::{DefId, DefKind, MethodSignature, TypeFormatter, TypeGraph};
use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

/// Nodes explored by a single walk, with the shallowest depth each was
/// entered at.
///
/// A node entered again at the same depth or deeper cannot reach anything
/// the earlier visit did not already cover. A shallower revisit is allowed
/// because the earlier visit may have been cut off by the depth limit.
#[derive(Default)]
struct Explored {
    depths: FxHashMap<DefId, u32>,
}

impl Explored {
    /// Returns `false` if `def` was already entered at `depth` or shallower.
    fn enter(&mut self, def: DefId, depth: u32) -> bool {
        match self.depths.get(&def) {
            Some(&seen) if seen <= depth => false,
            _ => {
                self.depths.insert(def, depth);
                true
            }
        }
    }
}

/// Validates contract assertions against a [`TypeGraph`].
///
/// Stateless between calls: `validate` only reads the graph.
pub struct ContractValidator<'a, G: TypeGraph + ?Sized> {
    graph: &'a G,
    max_depth: u32,
}

impl<'a, G: TypeGraph + ?Sized> ContractValidator<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            max_depth: MAX_HIERARCHY_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn graph(&self) -> &'a G {
        self.graph
    }

    /// Run the three checks in order, stopping at the first failure.
    pub fn validate(&self, assertion: &ContractAssertion) -> Result<(), ContractViolation> {
        let _span = tracing::debug_span!(
            "validate",
            enclosing = assertion.enclosing.0,
            target = assertion.target.0,
            method = %TypeFormatter::new(self.graph).format_signature(&assertion.method),
        )
        .entered();

        let result = self.check(assertion);
        match &result {
            Ok(()) => debug!("contract satisfied"),
            Err(violation) => debug!(kind = ?violation.kind(), "contract violated"),
        }
        result
    }

    fn check(&self, assertion: &ContractAssertion) -> Result<(), ContractViolation> {
        let target = assertion.target;

        if self.graph.kind_of(target) != Some(DefKind::Interface) {
            return Err(ContractViolation::NotAnInterface {
                target,
                target_name: self.graph.display_name(target),
            });
        }

        if !self.is_subtype(assertion.enclosing, target) {
            return Err(ContractViolation::DoesNotImplement {
                enclosing: assertion.enclosing,
                enclosing_name: self.graph.display_name(assertion.enclosing),
                interface: target,
                interface_name: self.graph.display_name(target),
            });
        }

        if self.find_method(target, &assertion.method).is_none() {
            return Err(ContractViolation::MissingMethod {
                interface: target,
                interface_name: self.graph.display_name(target),
                method: TypeFormatter::new(self.graph).format_method(&assertion.method),
            });
        }

        Ok(())
    }

    /// Is `ty` a subtype of `interface`?
    ///
    /// Directly listed interfaces are checked first, then each of them is
    /// searched recursively, then the superclass chain.
    pub fn is_subtype(&self, ty: DefId, interface: DefId) -> bool {
        self.is_subtype_at(ty, interface, 0, &mut Explored::default())
    }

    fn is_subtype_at(
        &self,
        ty: DefId,
        interface: DefId,
        depth: u32,
        explored: &mut Explored,
    ) -> bool {
        if ty == interface {
            return true;
        }
        if depth >= self.max_depth {
            warn!(ty = ty.0, depth, "hierarchy depth limit reached in subtype check");
            return false;
        }
        if !explored.enter(ty, depth) {
            return false;
        }
        trace!(ty = ty.0, interface = interface.0, depth, "is_subtype");

        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH_SIZE, || {
            let supers = self.graph.super_interfaces_of(ty);
            if supers.contains(&interface) {
                return true;
            }
            if supers
                .iter()
                .any(|&parent| self.is_subtype_at(parent, interface, depth + 1, explored))
            {
                return true;
            }
            match self.graph.superclass_of(ty) {
                Some(parent) => self.is_subtype_at(parent, interface, depth + 1, explored),
                None => false,
            }
        })
    }

    /// Find the first method of `interface` or its super-interfaces matching
    /// `method`.
    ///
    /// Each node's own methods are tried before its super-interfaces, which
    /// are searched in declaration order.
    pub fn find_method(&self, interface: DefId, method: &MethodSignature) -> Option<MethodSignature> {
        self.find_method_at(interface, method, 0, &mut Explored::default())
    }

    fn find_method_at(
        &self,
        interface: DefId,
        method: &MethodSignature,
        depth: u32,
        explored: &mut Explored,
    ) -> Option<MethodSignature> {
        if depth > self.max_depth {
            warn!(interface = interface.0, depth, "hierarchy depth limit reached in method search");
            return None;
        }
        if !explored.enter(interface, depth) {
            return None;
        }
        trace!(interface = interface.0, depth, "find_method");

        if let Some(found) = self
            .graph
            .declared_methods_of(interface)
            .into_iter()
            .find(|candidate| signatures_match(self.graph, candidate, method))
        {
            return Some(found);
        }

        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH_SIZE, || {
            self.graph
                .super_interfaces_of(interface)
                .into_iter()
                .find_map(|parent| self.find_method_at(parent, method, depth + 1, explored))
        })
    }
}

#[cfg(test)]
#[path = "tests/validator_tests.rs"]
mod tests;
