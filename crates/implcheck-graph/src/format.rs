//! Human-readable rendering of descriptors and signatures for diagnostics.

use crate::graph::TypeGraph;
use crate::types::{MethodSignature, TypeDescriptor};

/// Renders types the way they are written in declarations:
/// `double`, `Shape`, `List<String>`, `T[]`, and `combine(Foo)` for methods.
pub struct TypeFormatter<'a, G: TypeGraph + ?Sized> {
    graph: &'a G,
}

impl<'a, G: TypeGraph + ?Sized> TypeFormatter<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    pub fn format(&self, ty: &TypeDescriptor) -> String {
        let mut out = String::new();
        self.write_type(ty, &mut out);
        out
    }

    /// Method name followed by its parameter types, e.g. `combine(Foo)`.
    pub fn format_method(&self, method: &MethodSignature) -> String {
        let mut out = String::from(&*self.graph.resolve_atom(method.name));
        out.push('(');
        for (i, param) in method.params.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            self.write_type(param, &mut out);
        }
        out.push(')');
        out
    }

    /// Full signature including the return type, e.g. `combine(Foo): Foo`.
    pub fn format_signature(&self, method: &MethodSignature) -> String {
        let mut out = self.format_method(method);
        out.push_str(": ");
        self.write_type(&method.return_type, &mut out);
        out
    }

    fn write_type(&self, ty: &TypeDescriptor, out: &mut String) {
        match ty {
            TypeDescriptor::Primitive(kind) => out.push_str(kind.keyword()),
            TypeDescriptor::Declared(def) => out.push_str(&self.graph.display_name(*def)),
            TypeDescriptor::Array(element) => {
                self.write_type(element, out);
                out.push_str("[]");
            }
            TypeDescriptor::Applied { base, args } => {
                out.push_str(&self.graph.display_name(*base));
                out.push('<');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    self.write_type(arg, out);
                }
                out.push('>');
            }
            TypeDescriptor::TypeVar(name) => out.push_str(&self.graph.resolve_atom(*name)),
        }
    }
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
