//! JSON type manifests.
//!
//! A manifest describes the classes and interfaces of one source file:
//!
//! ```json
//! {
//!   "file": "Shapes.java",
//!   "types": [
//!     { "name": "Shape", "kind": "interface",
//!       "methods": [{ "name": "area", "returns": "double" }] },
//!     { "name": "Circle", "kind": "class", "implements": ["Shape"],
//!       "methods": [{ "name": "area", "returns": "double",
//!                     "implements": "Shape", "span": [120, 4] }] }
//!   ]
//! }
//! ```
//!
//! Type references are strings (`double`, `List<T>`, `Foo[]`) parsed by
//! [`type_ref`]; [`load`] resolves them against every loaded manifest.

use implcheck_checker::CheckerOptions;
use serde::Deserialize;

pub mod load;
pub mod type_ref;

pub use load::{ManifestError, ManifestSource, load_program};
pub use type_ref::{TypeRef, TypeRefError, parse_type_ref};

/// `[start, length]` in the described source file.
pub type Span = [u32; 2];

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Source file the types were declared in; diagnostics point here.
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub options: Option<CheckerOptions>,
    #[serde(default)]
    pub types: Vec<TypeEntry>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Interface,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeEntry {
    pub name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub type_params: Vec<String>,
    /// Superclass; classes only.
    #[serde(default)]
    pub extends: Option<String>,
    /// Implemented interfaces, or super-interfaces of an interface.
    #[serde(default)]
    pub implements: Vec<String>,
    #[serde(default)]
    pub methods: Vec<MethodEntry>,
    #[serde(default)]
    pub span: Option<Span>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodEntry {
    pub name: String,
    #[serde(default)]
    pub type_params: Vec<String>,
    pub returns: String,
    #[serde(default)]
    pub params: Vec<String>,
    /// Contract target: the interface this method claims to implement.
    #[serde(default)]
    pub implements: Option<String>,
    #[serde(default)]
    pub span: Option<Span>,
}

impl Manifest {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
