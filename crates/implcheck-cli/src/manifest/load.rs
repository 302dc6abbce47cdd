//! Two-phase loading of manifests into a [`DefinitionStore`].
//!
//! Phase one registers every type of every manifest so references may point
//! forward and across files. Phase two resolves heritage clauses and method
//! signatures. Loading stops at the first error.

use super::type_ref::{TypeRef, TypeRefError, parse_type_ref};
use super::{Manifest, MethodEntry, TypeEntry, TypeKind};
use implcheck_common::diagnostics::{diagnostic_messages, format_message};
use implcheck_graph::{
    DefId, DefKind, DefinitionInfo, DefinitionStore, MethodDecl, MethodSignature, PrimitiveKind,
    TypeDescriptor,
};
use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, info_span};

/// A parsed manifest and the file name its diagnostics are reported against.
#[derive(Debug)]
pub struct ManifestSource {
    pub file: String,
    pub manifest: Manifest,
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("{file}: invalid type reference '{text}': {source}")]
    TypeRef {
        file: String,
        text: String,
        #[source]
        source: TypeRefError,
    },

    #[error("{file}: {}", cannot_find(.name))]
    UnresolvedName { file: String, name: String },

    #[error("{file}: duplicate type '{name}', first declared in {first_file}")]
    DuplicateType {
        file: String,
        name: String,
        first_file: String,
    },

    #[error("{file}: '{name}' does not take type arguments")]
    UnexpectedTypeArguments { file: String, name: String },

    #[error("{file}: invalid heritage for '{type_name}': {reason}")]
    InvalidHeritage {
        file: String,
        type_name: String,
        reason: &'static str,
    },

    #[error(
        "{file}: contract target of '{type_name}.{method}' must name a declared type, found '{text}'"
    )]
    InvalidContractTarget {
        file: String,
        type_name: String,
        method: String,
        text: String,
    },
}

fn cannot_find(name: &str) -> String {
    format_message(diagnostic_messages::CANNOT_FIND_NAME, &[name])
}

struct Declared<'a> {
    id: DefId,
    kind: DefKind,
    file: &'a str,
    entry: &'a TypeEntry,
}

/// Load every manifest into a fresh store.
pub fn load_program(sources: &[ManifestSource]) -> Result<DefinitionStore, ManifestError> {
    let _span = info_span!("load_program", manifests = sources.len()).entered();
    let store = DefinitionStore::new();

    let mut declared: IndexMap<&str, Declared<'_>> = IndexMap::new();
    for source in sources {
        let file = store.intern(&source.file);
        for entry in &source.manifest.types {
            if let Some(first) = declared.get(entry.name.as_str()) {
                return Err(ManifestError::DuplicateType {
                    file: source.file.clone(),
                    name: entry.name.clone(),
                    first_file: first.file.to_string(),
                });
            }

            let name = store.intern(&entry.name);
            let (kind, info) = match entry.kind {
                TypeKind::Class => (DefKind::Class, DefinitionInfo::class(name)),
                TypeKind::Interface => (DefKind::Interface, DefinitionInfo::interface(name)),
            };
            let mut info = info
                .with_file(file)
                .with_type_params(entry.type_params.iter().map(|p| store.intern(p)).collect());
            if let Some([start, length]) = entry.span {
                info = info.with_span(start, length);
            }

            let id = store.register(info);
            declared.insert(
                entry.name.as_str(),
                Declared {
                    id,
                    kind,
                    file: &source.file,
                    entry,
                },
            );
        }
    }
    debug!(types = declared.len(), "declared types");

    for decl in declared.values() {
        let resolver = Resolver {
            store: &store,
            declared: &declared,
            file: decl.file,
            type_params: &decl.entry.type_params,
            method_params: &[],
        };

        let (extends, implements) = resolver.heritage(decl)?;
        store.set_heritage(decl.id, extends, implements);

        let methods = decl
            .entry
            .methods
            .iter()
            .map(|method| resolver.method(decl.entry, method))
            .collect::<Result<Vec<_>, _>>()?;
        store.set_methods(decl.id, methods);
    }

    Ok(store)
}

struct Resolver<'r, 'a> {
    store: &'r DefinitionStore,
    declared: &'r IndexMap<&'a str, Declared<'a>>,
    file: &'a str,
    type_params: &'r [String],
    method_params: &'r [String],
}

impl Resolver<'_, '_> {
    fn parse(&self, text: &str) -> Result<TypeRef, ManifestError> {
        parse_type_ref(text).map_err(|source| ManifestError::TypeRef {
            file: self.file.to_string(),
            text: text.to_string(),
            source,
        })
    }

    fn is_type_param(&self, name: &str) -> bool {
        self.method_params.iter().any(|p| p == name)
            || self.type_params.iter().any(|p| p == name)
    }

    fn no_args(&self, ty: &TypeRef) -> Result<(), ManifestError> {
        if ty.args.is_empty() {
            Ok(())
        } else {
            Err(ManifestError::UnexpectedTypeArguments {
                file: self.file.to_string(),
                name: ty.name.clone(),
            })
        }
    }

    fn lookup(&self, name: &str) -> Result<&Declared<'_>, ManifestError> {
        self.declared
            .get(name)
            .ok_or_else(|| ManifestError::UnresolvedName {
                file: self.file.to_string(),
                name: name.to_string(),
            })
    }

    /// Primitive keyword, then method type parameter, then type parameter,
    /// then declared type.
    fn descriptor(&self, ty: &TypeRef) -> Result<TypeDescriptor, ManifestError> {
        let base = if let Some(kind) = PrimitiveKind::from_keyword(&ty.name) {
            self.no_args(ty)?;
            TypeDescriptor::Primitive(kind)
        } else if self.is_type_param(&ty.name) {
            self.no_args(ty)?;
            TypeDescriptor::TypeVar(self.store.intern(&ty.name))
        } else {
            let id = self.lookup(&ty.name)?.id;
            if ty.args.is_empty() {
                TypeDescriptor::Declared(id)
            } else {
                let args = ty
                    .args
                    .iter()
                    .map(|arg| self.descriptor(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                TypeDescriptor::applied(id, args)
            }
        };
        Ok((0..ty.array_depth).fold(base, |element, _| TypeDescriptor::array(element)))
    }

    /// Resolve a heritage reference to its base type. Type arguments are
    /// checked but not recorded.
    fn base_type(&self, text: &str, type_name: &str) -> Result<(DefId, DefKind), ManifestError> {
        let ty = self.parse(text)?;
        if ty.array_depth > 0 || self.is_type_param(&ty.name) {
            return Err(self.invalid_heritage(
                type_name,
                "a base type must be a declared class or interface",
            ));
        }
        self.descriptor(&ty)?;
        let decl = self.lookup(&ty.name)?;
        Ok((decl.id, decl.kind))
    }

    fn invalid_heritage(&self, type_name: &str, reason: &'static str) -> ManifestError {
        ManifestError::InvalidHeritage {
            file: self.file.to_string(),
            type_name: type_name.to_string(),
            reason,
        }
    }

    fn heritage(&self, decl: &Declared<'_>) -> Result<(Option<DefId>, Vec<DefId>), ManifestError> {
        let name = decl.entry.name.as_str();

        let extends = match (&decl.entry.extends, decl.kind) {
            (None, _) => None,
            (Some(_), DefKind::Interface) => {
                return Err(self.invalid_heritage(
                    name,
                    "interfaces list their super-interfaces under \"implements\"",
                ));
            }
            (Some(text), DefKind::Class) => match self.base_type(text, name)? {
                (id, DefKind::Class) => Some(id),
                (_, DefKind::Interface) => {
                    return Err(self.invalid_heritage(name, "a class can only extend a class"));
                }
            },
        };

        let mut implements = Vec::with_capacity(decl.entry.implements.len());
        for text in &decl.entry.implements {
            match self.base_type(text, name)? {
                (id, DefKind::Interface) => implements.push(id),
                (_, DefKind::Class) => {
                    return Err(self.invalid_heritage(
                        name,
                        "only interfaces can be implemented, or extended by an interface",
                    ));
                }
            }
        }

        Ok((extends, implements))
    }

    fn method(&self, owner: &TypeEntry, entry: &MethodEntry) -> Result<MethodDecl, ManifestError> {
        let scoped = Resolver {
            method_params: &entry.type_params,
            ..*self
        };

        let return_type = scoped.descriptor(&scoped.parse(&entry.returns)?)?;
        let params = entry
            .params
            .iter()
            .map(|text| scoped.descriptor(&scoped.parse(text)?))
            .collect::<Result<Vec<_>, _>>()?;

        let mut decl = MethodDecl::new(MethodSignature::new(
            self.store.intern(&entry.name),
            return_type,
            params,
        ));
        if let Some(text) = &entry.implements {
            decl = decl.with_contract(scoped.contract_target(owner, entry, text)?);
        }
        if let Some([start, length]) = entry.span {
            decl = decl.with_span(start, length);
        }
        Ok(decl)
    }

    /// The contract target may be any declared type; kind errors are the
    /// validator's to report.
    fn contract_target(
        &self,
        owner: &TypeEntry,
        entry: &MethodEntry,
        text: &str,
    ) -> Result<DefId, ManifestError> {
        let ty = self.parse(text)?;
        if ty.array_depth > 0
            || self.is_type_param(&ty.name)
            || PrimitiveKind::from_keyword(&ty.name).is_some()
        {
            return Err(ManifestError::InvalidContractTarget {
                file: self.file.to_string(),
                type_name: owner.name.clone(),
                method: entry.name.clone(),
                text: text.to_string(),
            });
        }
        self.descriptor(&ty)?;
        Ok(self.lookup(&ty.name)?.id)
    }
}

#[cfg(test)]
#[path = "../tests/load_tests.rs"]
mod tests;
