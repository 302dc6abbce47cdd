//! Centralized limits and thresholds.
//!
//! The type hierarchy handed to the checker is expected to be acyclic, but it
//! comes from user-supplied manifests. Every recursive walk over superclass
//! and super-interface edges is bounded by a depth limit so that a malformed
//! graph degrades into a failed check instead of a stack overflow.

/// Default maximum depth for hierarchy traversal (subtype and method search).
///
/// Each step along a superclass or super-interface edge adds one level. Real
/// class hierarchies rarely exceed a few dozen levels; hitting this limit means
/// the graph is cyclic or pathological.
pub const MAX_HIERARCHY_DEPTH: u32 = 256;

/// Red zone kept free on the stack before `stacker` grows it during recursion.
pub const STACK_RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment allocated by `stacker`.
pub const STACK_GROWTH_SIZE: usize = 1024 * 1024;
