use crate::def::{DefId, DefKind, DefinitionStore};
use crate::types::{MethodSignature, TypeDescriptor};
use implcheck_common::Atom;
use std::sync::Arc;

/// Read-only access to declared types.
///
/// This is the only surface the contract validator depends on. Unknown ids
/// answer `None` or an empty list; they are never an error at this layer.
pub trait TypeGraph {
    fn kind_of(&self, def: DefId) -> Option<DefKind>;

    /// Superclass of a class. Interfaces have none.
    fn superclass_of(&self, def: DefId) -> Option<DefId>;

    /// Directly listed interfaces, in declaration order.
    fn super_interfaces_of(&self, def: DefId) -> Vec<DefId>;

    /// Directly declared methods, in declaration order.
    fn declared_methods_of(&self, def: DefId) -> Vec<MethodSignature>;

    fn is_free_type_variable(&self, ty: &TypeDescriptor) -> bool {
        ty.is_type_var()
    }

    fn name_of(&self, def: DefId) -> Option<Atom>;

    fn resolve_atom(&self, atom: Atom) -> Arc<str>;

    /// Declared name of a type, or a placeholder for unknown ids.
    fn display_name(&self, def: DefId) -> Arc<str> {
        match self.name_of(def) {
            Some(name) => self.resolve_atom(name),
            None => Arc::from(format!("<unknown #{}>", def.0)),
        }
    }
}

impl TypeGraph for DefinitionStore {
    fn kind_of(&self, def: DefId) -> Option<DefKind> {
        self.get_kind(def)
    }

    fn superclass_of(&self, def: DefId) -> Option<DefId> {
        match self.get_kind(def)? {
            DefKind::Class => self.get_extends(def),
            DefKind::Interface => None,
        }
    }

    fn super_interfaces_of(&self, def: DefId) -> Vec<DefId> {
        self.get_implements(def).unwrap_or_default()
    }

    fn declared_methods_of(&self, def: DefId) -> Vec<MethodSignature> {
        self.get_methods(def)
            .map(|methods| methods.iter().map(|m| m.signature.clone()).collect())
            .unwrap_or_default()
    }

    fn name_of(&self, def: DefId) -> Option<Atom> {
        self.get_name(def)
    }

    fn resolve_atom(&self, atom: Atom) -> Arc<str> {
        self.resolve(atom)
    }
}
