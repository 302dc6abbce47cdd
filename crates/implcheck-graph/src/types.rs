//! Type descriptors and method signatures.
//!
//! `TypeDescriptor` derives `PartialEq` for plain structural comparison of
//! data (tests, deduplication). Contract matching never uses it: it goes
//! through [`TypeDescriptor::is_identical`], where a free type variable is
//! never identical to anything, itself included.

use crate::def::DefId;
use implcheck_common::Atom;
use smallvec::SmallVec;

/// Built-in value types. Each denotes exactly one type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Void,
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 9] = [
        PrimitiveKind::Void,
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Char,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Void => "void",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }
}

/// A type as it appears in a method signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// `int`, `double`, `void`, ...
    Primitive(PrimitiveKind),
    /// A declared class or interface, by identity.
    Declared(DefId),
    /// `T[]`
    Array(Box<TypeDescriptor>),
    /// A parameterized declared type such as `List<String>`.
    Applied { base: DefId, args: Vec<TypeDescriptor> },
    /// A free type variable (generic parameter); a wildcard in matching.
    TypeVar(Atom),
}

impl TypeDescriptor {
    pub fn array(element: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(element))
    }

    pub fn applied(base: DefId, args: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        TypeDescriptor::Applied {
            base,
            args: args.into_iter().collect(),
        }
    }

    pub const fn is_type_var(&self) -> bool {
        matches!(self, TypeDescriptor::TypeVar(_))
    }

    /// Identity equality between two descriptors.
    ///
    /// Concrete descriptors are identical iff they denote the same type.
    /// A type variable on either side, at any depth, is never identical.
    pub fn is_identical(&self, other: &TypeDescriptor) -> bool {
        match (self, other) {
            (TypeDescriptor::Primitive(a), TypeDescriptor::Primitive(b)) => a == b,
            (TypeDescriptor::Declared(a), TypeDescriptor::Declared(b)) => a == b,
            (TypeDescriptor::Array(a), TypeDescriptor::Array(b)) => a.is_identical(b),
            (
                TypeDescriptor::Applied { base: a, args: a_args },
                TypeDescriptor::Applied { base: b, args: b_args },
            ) => {
                a == b
                    && a_args.len() == b_args.len()
                    && a_args.iter().zip(b_args).all(|(x, y)| x.is_identical(y))
            }
            _ => false,
        }
    }
}

pub type ParamList = SmallVec<[TypeDescriptor; 4]>;

/// A method shape: name, return type and ordered parameter types.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    pub name: Atom,
    pub return_type: TypeDescriptor,
    pub params: ParamList,
}

impl MethodSignature {
    pub fn new(
        name: Atom,
        return_type: TypeDescriptor,
        params: impl IntoIterator<Item = TypeDescriptor>,
    ) -> Self {
        Self {
            name,
            return_type,
            params: params.into_iter().collect(),
        }
    }
}

/// A method as declared on a type, with its optional contract marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDecl {
    pub signature: MethodSignature,
    /// Target of the `@Implement`-style marker, if the method carries one.
    pub contract: Option<DefId>,
    /// `(start, length)` of the declaration in its source file.
    pub span: Option<(u32, u32)>,
}

impl MethodDecl {
    pub const fn new(signature: MethodSignature) -> Self {
        Self {
            signature,
            contract: None,
            span: None,
        }
    }

    /// Mark this method as implementing a method of `target`.
    pub const fn with_contract(mut self, target: DefId) -> Self {
        self.contract = Some(target);
        self
    }

    pub const fn with_span(mut self, start: u32, length: u32) -> Self {
        self.span = Some((start, length));
        self
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
