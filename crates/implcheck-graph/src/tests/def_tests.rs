use super::*;
use crate::graph::TypeGraph;
use crate::types::{MethodSignature, PrimitiveKind, TypeDescriptor};

#[test]
fn test_def_id_validity() {
    assert!(!DefId::INVALID.is_valid());
    assert!(DefId(DefId::FIRST_VALID).is_valid());
}

#[test]
fn test_register_allocates_sequential_ids() {
    let store = DefinitionStore::new();
    let a = store.register(DefinitionInfo::interface(store.intern("A")));
    let b = store.register(DefinitionInfo::class(store.intern("B")));

    assert_eq!(a, DefId(1));
    assert_eq!(b, DefId(2));
    assert_eq!(store.len(), 2);
    assert_eq!(store.all_ids(), vec![a, b]);
}

#[test]
fn test_lookup_by_name_first_registration_wins() {
    let store = DefinitionStore::new();
    let first = store.register(DefinitionInfo::interface(store.intern("Shape")));
    let _second = store.register(DefinitionInfo::class(store.intern("Shape")));

    assert_eq!(store.lookup("Shape"), Some(first));
    assert_eq!(store.lookup("Missing"), None);
}

#[test]
fn test_set_heritage_and_methods() {
    let store = DefinitionStore::new();
    let shape = store.register(DefinitionInfo::interface(store.intern("Shape")));
    let base = store.register(DefinitionInfo::class(store.intern("Base")));
    let foo = store.register(DefinitionInfo::class(store.intern("Foo")));

    store.set_heritage(foo, Some(base), vec![shape]);
    let area = MethodSignature::new(
        store.intern("area"),
        TypeDescriptor::Primitive(PrimitiveKind::Double),
        [],
    );
    store.set_methods(foo, vec![MethodDecl::new(area.clone()).with_contract(shape)]);

    assert_eq!(store.get_extends(foo), Some(base));
    assert_eq!(store.get_implements(foo), Some(vec![shape]));
    assert_eq!(store.declared_methods_of(foo), vec![area]);
    let methods = store.get_methods(foo).expect("methods exist");
    assert_eq!(methods[0].contract, Some(shape));
}

#[test]
fn test_type_graph_view_of_store() {
    let store = DefinitionStore::new();
    let parent = store.register(DefinitionInfo::interface(store.intern("Parent")));
    // An interface's `extends` slot is ignored by the accessor: interfaces
    // only have super-interfaces.
    let child = store.register(
        DefinitionInfo::interface(store.intern("Child"))
            .with_implements(vec![parent])
            .with_extends(parent),
    );

    assert_eq!(store.kind_of(child), Some(DefKind::Interface));
    assert_eq!(store.superclass_of(child), None);
    assert_eq!(store.super_interfaces_of(child), vec![parent]);
    assert_eq!(&*store.display_name(child), "Child");
}

#[test]
fn test_unknown_ids_answer_empty() {
    let store = DefinitionStore::new();
    let ghost = DefId(42);
    assert_eq!(store.kind_of(ghost), None);
    assert_eq!(store.superclass_of(ghost), None);
    assert!(store.super_interfaces_of(ghost).is_empty());
    assert!(store.declared_methods_of(ghost).is_empty());
    assert_eq!(&*store.display_name(ghost), "<unknown #42>");
}

#[test]
fn test_definition_info_builders() {
    let store = DefinitionStore::new();
    let t = store.intern("T");
    let file = store.intern("Shapes.java");
    let info = DefinitionInfo::interface(store.intern("Shape"))
        .with_type_params(vec![t])
        .with_file(file)
        .with_span(17, 5);

    assert_eq!(info.kind, DefKind::Interface);
    assert_eq!(info.type_params, vec![t]);
    assert_eq!(info.file, Some(file));
    assert_eq!(info.span, Some((17, 5)));
    assert!(info.methods.is_empty());
}

#[test]
fn test_concurrent_reads() {
    use rayon::prelude::*;

    let store = DefinitionStore::new();
    let root = store.register(DefinitionInfo::interface(store.intern("Root")));
    let ids: Vec<DefId> = (0..64)
        .map(|i| {
            store.register(
                DefinitionInfo::class(store.intern(&format!("C{i}"))).with_implements(vec![root]),
            )
        })
        .collect();

    let all_implement_root = ids
        .par_iter()
        .all(|&id| store.super_interfaces_of(id) == vec![root]);
    assert!(all_implement_root);
}
