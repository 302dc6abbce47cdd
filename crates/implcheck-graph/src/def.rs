//! Definition identifiers and storage for declared types.
//!
//! Every class and interface is registered once in a [`DefinitionStore`] and
//! addressed by a [`DefId`] afterwards. Edges (superclass, super-interfaces)
//! and descriptors refer to other types by `DefId` only, so the graph holds
//! no references into itself and shared ancestors are just repeated ids.
//!
//! Registration happens in two phases when loading from a manifest: every
//! type is registered first so that names resolve, then heritage and methods
//! are filled in with [`DefinitionStore::set_heritage`] and
//! [`DefinitionStore::set_methods`].

use crate::types::MethodDecl;
use dashmap::DashMap;
use implcheck_common::{Atom, Interner};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use tracing::trace;

/// Global counter for assigning unique instance IDs to `DefinitionStore` instances.
static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

// =============================================================================
// DefId - Definition Identifier
// =============================================================================

/// Identifier of a declared class or interface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefId(pub u32);

impl DefId {
    /// Sentinel value for invalid `DefId`.
    pub const INVALID: Self = Self(0);

    /// First valid `DefId`.
    pub const FIRST_VALID: u32 = 1;

    /// Check if this `DefId` is valid.
    pub const fn is_valid(self) -> bool {
        self.0 >= Self::FIRST_VALID
    }
}

// =============================================================================
// DefKind - Definition Kind
// =============================================================================

/// Kind of type definition.
///
/// | Kind | Superclass | Super-interfaces |
/// |------|------------|------------------|
/// | Class | zero or one class | implemented interfaces |
/// | Interface | never | extended interfaces |
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DefKind {
    Class,
    Interface,
}

impl DefKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            DefKind::Class => "class",
            DefKind::Interface => "interface",
        }
    }
}

// =============================================================================
// Definition Info - Stored Definition Data
// =============================================================================

/// Complete information about a declared type.
#[derive(Clone, Debug)]
pub struct DefinitionInfo {
    pub kind: DefKind,

    /// Name of the definition (for diagnostics and name lookup)
    pub name: Atom,

    /// Declared type parameters, in order
    pub type_params: Vec<Atom>,

    /// For classes: parent class `DefId` (if extends)
    pub extends: Option<DefId>,

    /// Implemented (classes) or extended (interfaces) interfaces, in declaration order
    pub implements: Vec<DefId>,

    /// Declared methods, in declaration order
    pub methods: Arc<[MethodDecl]>,

    /// Source file the type was declared in
    pub file: Option<Atom>,

    /// `(start, length)` of the declaration name
    pub span: Option<(u32, u32)>,
}

impl DefinitionInfo {
    fn new(kind: DefKind, name: Atom) -> Self {
        Self {
            kind,
            name,
            type_params: Vec::new(),
            extends: None,
            implements: Vec::new(),
            methods: Arc::from(Vec::new()),
            file: None,
            span: None,
        }
    }

    /// Create a new class definition.
    pub fn class(name: Atom) -> Self {
        Self::new(DefKind::Class, name)
    }

    /// Create a new interface definition.
    pub fn interface(name: Atom) -> Self {
        Self::new(DefKind::Interface, name)
    }

    /// Set the extends parent for a class.
    pub const fn with_extends(mut self, parent: DefId) -> Self {
        self.extends = Some(parent);
        self
    }

    /// Set implemented (or, for interfaces, extended) interfaces.
    pub fn with_implements(mut self, interfaces: Vec<DefId>) -> Self {
        self.implements = interfaces;
        self
    }

    pub fn with_type_params(mut self, type_params: Vec<Atom>) -> Self {
        self.type_params = type_params;
        self
    }

    pub fn with_methods(mut self, methods: Vec<MethodDecl>) -> Self {
        self.methods = Arc::from(methods);
        self
    }

    pub const fn with_file(mut self, file: Atom) -> Self {
        self.file = Some(file);
        self
    }

    /// Set source span.
    pub const fn with_span(mut self, start: u32, length: u32) -> Self {
        self.span = Some((start, length));
        self
    }
}

// =============================================================================
// DefinitionStore - Storage for Definitions
// =============================================================================

/// Thread-safe storage for type definitions.
///
/// Uses `DashMap` so the same store can be read from multiple checking threads.
///
/// ## Usage
///
/// ```
/// use implcheck_graph::{DefinitionInfo, DefinitionStore, DefKind};
///
/// let store = DefinitionStore::new();
/// let shape = store.register(DefinitionInfo::interface(store.intern("Shape")));
///
/// assert_eq!(store.get_kind(shape), Some(DefKind::Interface));
/// assert_eq!(store.lookup("Shape"), Some(shape));
/// ```
#[derive(Debug)]
pub struct DefinitionStore {
    /// Unique instance ID for debugging (tracks which store instance this is)
    instance_id: u64,

    /// `DefId` -> `DefinitionInfo` mapping
    definitions: DashMap<DefId, DefinitionInfo>,

    /// Name -> `DefId`; the first registration of a name wins
    by_name: DashMap<Atom, DefId>,

    /// Type, method and file names
    interner: Interner,

    /// Next available `DefId`
    next_id: AtomicU32,
}

impl Default for DefinitionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DefinitionStore {
    /// Create a new definition store.
    pub fn new() -> Self {
        let instance_id = NEXT_INSTANCE_ID.fetch_add(1, Ordering::SeqCst);
        trace!(instance_id, "DefinitionStore::new - creating new instance");
        let interner = Interner::new();
        interner.intern_common();
        Self {
            instance_id,
            definitions: DashMap::new(),
            by_name: DashMap::new(),
            interner,
            next_id: AtomicU32::new(DefId::FIRST_VALID),
        }
    }

    /// Allocate a fresh `DefId`.
    fn allocate(&self) -> DefId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        trace!(
            instance_id = self.instance_id,
            allocated_def_id = %id,
            "DefinitionStore::allocate"
        );
        DefId(id)
    }

    /// Register a new definition and return its `DefId`.
    pub fn register(&self, info: DefinitionInfo) -> DefId {
        let id = self.allocate();
        trace!(
            instance_id = self.instance_id,
            def_id = %id.0,
            kind = ?info.kind,
            "DefinitionStore::register"
        );
        self.by_name.entry(info.name).or_insert(id);
        self.definitions.insert(id, info);
        id
    }

    /// Intern a name in this store's interner.
    pub fn intern(&self, s: &str) -> Atom {
        self.interner.intern(s)
    }

    /// Resolve an interned name.
    pub fn resolve(&self, atom: Atom) -> Arc<str> {
        self.interner.resolve(atom)
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Find a definition by its declared name.
    pub fn lookup(&self, name: &str) -> Option<DefId> {
        let atom = self.interner.lookup(name)?;
        self.by_name.get(&atom).map(|r| *r)
    }

    /// Get definition info by `DefId`.
    pub fn get(&self, id: DefId) -> Option<DefinitionInfo> {
        self.definitions.get(&id).map(|r| r.clone())
    }

    /// Check if a `DefId` exists.
    pub fn contains(&self, id: DefId) -> bool {
        self.definitions.contains_key(&id)
    }

    /// Get the kind of a definition.
    pub fn get_kind(&self, id: DefId) -> Option<DefKind> {
        self.definitions.get(&id).map(|r| r.kind)
    }

    /// Get the name of a definition.
    pub fn get_name(&self, id: DefId) -> Option<Atom> {
        self.definitions.get(&id).map(|r| r.name)
    }

    /// Get parent class `DefId` for a class.
    pub fn get_extends(&self, id: DefId) -> Option<DefId> {
        self.definitions.get(&id).and_then(|r| r.extends)
    }

    /// Get implemented interfaces for a class/interface.
    pub fn get_implements(&self, id: DefId) -> Option<Vec<DefId>> {
        self.definitions.get(&id).map(|r| r.implements.clone())
    }

    /// Get declared methods for a class/interface.
    pub fn get_methods(&self, id: DefId) -> Option<Arc<[MethodDecl]>> {
        self.definitions.get(&id).map(|r| Arc::clone(&r.methods))
    }

    /// Replace the superclass and super-interfaces of a definition.
    pub fn set_heritage(&self, id: DefId, extends: Option<DefId>, implements: Vec<DefId>) {
        if let Some(mut entry) = self.definitions.get_mut(&id) {
            entry.extends = extends;
            entry.implements = implements;
        }
    }

    /// Replace the declared methods of a definition.
    pub fn set_methods(&self, id: DefId, methods: Vec<MethodDecl>) {
        if let Some(mut entry) = self.definitions.get_mut(&id) {
            entry.methods = Arc::from(methods);
        }
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// All `DefIds` in registration order.
    pub fn all_ids(&self) -> Vec<DefId> {
        let mut ids: Vec<DefId> = self.definitions.iter().map(|r| *r.key()).collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
#[path = "tests/def_tests.rs"]
mod tests;
