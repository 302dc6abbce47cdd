use super::*;
use crate::violation::ViolationKind;
use implcheck_graph::{DefinitionInfo, DefinitionStore, MethodDecl, PrimitiveKind, TypeDescriptor};

fn double() -> TypeDescriptor {
    TypeDescriptor::Primitive(PrimitiveKind::Double)
}

fn class(store: &DefinitionStore, name: &str) -> DefId {
    store.register(DefinitionInfo::class(store.intern(name)))
}

fn interface(store: &DefinitionStore, name: &str) -> DefId {
    store.register(DefinitionInfo::interface(store.intern(name)))
}

fn sig(store: &DefinitionStore, name: &str, ret: TypeDescriptor) -> MethodSignature {
    MethodSignature::new(store.intern(name), ret, [])
}

fn declare(store: &DefinitionStore, def: DefId, methods: Vec<MethodSignature>) {
    store.set_methods(def, methods.into_iter().map(MethodDecl::new).collect());
}

fn kind_of(result: Result<(), ContractViolation>) -> Option<ViolationKind> {
    result.err().map(|v| v.kind())
}

#[test]
fn test_direct_implementation_passes() {
    let store = DefinitionStore::new();
    let shape = interface(&store, "Shape");
    let foo = class(&store, "Foo");
    store.set_heritage(foo, None, vec![shape]);
    declare(&store, shape, vec![sig(&store, "area", double())]);

    let validator = ContractValidator::new(&store);
    let assertion = ContractAssertion::new(foo, sig(&store, "area", double()), shape);
    assert_eq!(validator.validate(&assertion), Ok(()));
}

#[test]
fn test_target_class_reports_not_an_interface() {
    let store = DefinitionStore::new();
    let rectangle = class(&store, "Rectangle");
    let foo = class(&store, "Foo");

    let validator = ContractValidator::new(&store);
    let result = validator.validate(&ContractAssertion::new(foo, sig(&store, "area", double()), rectangle));
    assert_eq!(
        result,
        Err(ContractViolation::NotAnInterface {
            target: rectangle,
            target_name: "Rectangle".into(),
        })
    );
}

#[test]
fn test_unknown_target_reports_not_an_interface() {
    let store = DefinitionStore::new();
    let foo = class(&store, "Foo");
    let validator = ContractValidator::new(&store);
    let result = validator.validate(&ContractAssertion::new(foo, sig(&store, "area", double()), DefId(99)));
    assert_eq!(kind_of(result), Some(ViolationKind::NotAnInterface));
}

#[test]
fn test_unrelated_type_reports_does_not_implement() {
    let store = DefinitionStore::new();
    let shape = interface(&store, "Shape");
    let other = interface(&store, "Other");
    let base = class(&store, "Base");
    let foo = class(&store, "Foo");
    store.set_heritage(foo, Some(base), vec![other]);
    declare(&store, shape, vec![sig(&store, "area", double())]);

    let validator = ContractValidator::new(&store);
    let result = validator.validate(&ContractAssertion::new(foo, sig(&store, "area", double()), shape));
    assert_eq!(
        result,
        Err(ContractViolation::DoesNotImplement {
            enclosing: foo,
            enclosing_name: "Foo".into(),
            interface: shape,
            interface_name: "Shape".into(),
        })
    );
}

#[test]
fn test_implementation_through_superclass_chain() {
    let store = DefinitionStore::new();
    let shape = interface(&store, "Shape");
    let grand = class(&store, "Grand");
    let parent = class(&store, "Parent");
    let foo = class(&store, "Foo");
    store.set_heritage(grand, None, vec![shape]);
    store.set_heritage(parent, Some(grand), Vec::new());
    store.set_heritage(foo, Some(parent), Vec::new());

    let validator = ContractValidator::new(&store);
    assert!(validator.is_subtype(foo, shape));
    assert!(validator.is_subtype(parent, shape));
    assert!(!validator.is_subtype(shape, grand));
}

#[test]
fn test_implementation_through_super_interface_of_superclass() {
    let store = DefinitionStore::new();
    let shape = interface(&store, "Shape");
    let polygon = interface(&store, "Polygon");
    let base = class(&store, "Base");
    let foo = class(&store, "Foo");
    store.set_heritage(polygon, None, vec![shape]);
    store.set_heritage(base, None, vec![polygon]);
    store.set_heritage(foo, Some(base), Vec::new());

    assert!(ContractValidator::new(&store).is_subtype(foo, shape));
}

#[test]
fn test_subtype_is_reflexive() {
    let store = DefinitionStore::new();
    let shape = interface(&store, "Shape");
    assert!(ContractValidator::new(&store).is_subtype(shape, shape));
}

#[test]
fn test_missing_method_reports_method_text() {
    let store = DefinitionStore::new();
    let shape = interface(&store, "Shape");
    let foo = class(&store, "Foo");
    store.set_heritage(foo, None, vec![shape]);
    declare(&store, shape, vec![sig(&store, "perimeter", double())]);

    let asserted = MethodSignature::new(store.intern("area"), double(), [TypeDescriptor::Declared(foo)]);
    let result = ContractValidator::new(&store).validate(&ContractAssertion::new(foo, asserted, shape));
    assert_eq!(
        result,
        Err(ContractViolation::MissingMethod {
            interface: shape,
            interface_name: "Shape".into(),
            method: "area(Foo)".to_string(),
        })
    );
}

#[test]
fn test_method_found_on_deep_ancestor_interface() {
    let store = DefinitionStore::new();
    let mut chain = vec![interface(&store, "I0")];
    for i in 1..10 {
        let next = interface(&store, &format!("I{i}"));
        store.set_heritage(next, None, vec![*chain.last().expect("non-empty")]);
        chain.push(next);
    }
    declare(&store, chain[0], vec![sig(&store, "area", double())]);

    let leaf = *chain.last().expect("non-empty");
    let validator = ContractValidator::new(&store);
    assert!(validator.find_method(leaf, &sig(&store, "area", double())).is_some());
    assert!(validator.find_method(chain[0], &sig(&store, "volume", double())).is_none());
}

#[test]
fn test_method_search_skips_superclass_edges() {
    // Interfaces never have a superclass; a bogus `extends` on an interface
    // must not be searched.
    let store = DefinitionStore::new();
    let holder = class(&store, "Holder");
    declare(&store, holder, vec![sig(&store, "area", double())]);
    let shape = store.register(DefinitionInfo::interface(store.intern("Shape")).with_extends(holder));

    let validator = ContractValidator::new(&store);
    assert!(validator.find_method(shape, &sig(&store, "area", double())).is_none());
}

#[test]
fn test_first_match_wins_in_declaration_order() {
    let store = DefinitionStore::new();
    let t = TypeDescriptor::TypeVar(store.intern("T"));
    let left = interface(&store, "Left");
    let right = interface(&store, "Right");
    let both = interface(&store, "Both");
    store.set_heritage(both, None, vec![left, right]);
    // Both ancestors declare a matching `get`; Left is listed first.
    declare(&store, left, vec![sig(&store, "get", t)]);
    declare(&store, right, vec![sig(&store, "get", double())]);

    let validator = ContractValidator::new(&store);
    let found = validator
        .find_method(both, &sig(&store, "get", double()))
        .expect("a match exists");
    assert!(found.return_type.is_type_var());
}

#[test]
fn test_own_methods_before_super_interfaces() {
    let store = DefinitionStore::new();
    let t = TypeDescriptor::TypeVar(store.intern("T"));
    let parent = interface(&store, "Parent");
    let child = interface(&store, "Child");
    store.set_heritage(child, None, vec![parent]);
    declare(&store, parent, vec![sig(&store, "get", t)]);
    declare(&store, child, vec![sig(&store, "get", double())]);

    let found = ContractValidator::new(&store)
        .find_method(child, &sig(&store, "get", double()))
        .expect("a match exists");
    assert_eq!(found.return_type, double());
}

#[test]
fn test_priority_not_an_interface_first() {
    let store = DefinitionStore::new();
    let rectangle = class(&store, "Rectangle");
    let foo = class(&store, "Foo");
    // Foo does not extend Rectangle and Rectangle has no methods: checks 2
    // and 3 would also fail.
    let result = ContractValidator::new(&store)
        .validate(&ContractAssertion::new(foo, sig(&store, "area", double()), rectangle));
    assert_eq!(kind_of(result), Some(ViolationKind::NotAnInterface));
}

#[test]
fn test_priority_does_not_implement_before_missing_method() {
    let store = DefinitionStore::new();
    let shape = interface(&store, "Shape");
    let foo = class(&store, "Foo");
    let result = ContractValidator::new(&store)
        .validate(&ContractAssertion::new(foo, sig(&store, "area", double()), shape));
    assert_eq!(kind_of(result), Some(ViolationKind::DoesNotImplement));
}

#[test]
fn test_cyclic_graph_terminates() {
    let store = DefinitionStore::new();
    let a = interface(&store, "A");
    let b = interface(&store, "B");
    let target = interface(&store, "Target");
    let foo = class(&store, "Foo");
    store.set_heritage(a, None, vec![b]);
    store.set_heritage(b, None, vec![a]);
    store.set_heritage(foo, Some(foo), vec![a]);

    let validator = ContractValidator::new(&store);
    assert!(!validator.is_subtype(foo, target));
    assert!(validator.find_method(a, &sig(&store, "area", double())).is_none());
}

#[test]
fn test_branching_cycle_terminates_at_default_depth() {
    let store = DefinitionStore::new();
    let a = interface(&store, "A");
    let b = interface(&store, "B");
    let c = interface(&store, "C");
    let target = interface(&store, "Target");
    let foo = class(&store, "Foo");
    store.set_heritage(a, None, vec![b, c]);
    store.set_heritage(b, None, vec![a]);
    store.set_heritage(c, None, vec![a]);
    store.set_heritage(foo, None, vec![a]);

    let validator = ContractValidator::new(&store);
    let area = sig(&store, "area", double());
    assert_eq!(
        kind_of(validator.validate(&ContractAssertion::new(foo, area.clone(), target))),
        Some(ViolationKind::DoesNotImplement)
    );
    assert_eq!(
        kind_of(validator.validate(&ContractAssertion::new(foo, area, a))),
        Some(ViolationKind::MissingMethod)
    );
}

/// `I{k+1}` extends `A{k}` and `B{k}`, which both extend `I{k}`. `area()` is
/// declared only on `I0`. Returns the topmost interface.
fn diamond_ladder(store: &DefinitionStore, levels: usize) -> DefId {
    let mut top = interface(store, "I0");
    declare(store, top, vec![sig(store, "area", double())]);
    for k in 0..levels {
        let left = interface(store, &format!("A{k}"));
        let right = interface(store, &format!("B{k}"));
        store.set_heritage(left, None, vec![top]);
        store.set_heritage(right, None, vec![top]);
        top = interface(store, &format!("I{}", k + 1));
        store.set_heritage(top, None, vec![left, right]);
    }
    top
}

#[test]
fn test_diamond_ladder_unrelated_target() {
    let store = DefinitionStore::new();
    let top = diamond_ladder(&store, 40);
    let shape = interface(&store, "Shape");
    declare(&store, shape, vec![sig(&store, "area", double())]);
    let foo = class(&store, "Foo");
    store.set_heritage(foo, None, vec![top]);

    let result = ContractValidator::new(&store)
        .validate(&ContractAssertion::new(foo, sig(&store, "area", double()), shape));
    assert_eq!(kind_of(result), Some(ViolationKind::DoesNotImplement));
}

#[test]
fn test_diamond_ladder_method_search() {
    let store = DefinitionStore::new();
    let top = diamond_ladder(&store, 40);
    let foo = class(&store, "Foo");
    store.set_heritage(foo, None, vec![top]);

    let validator = ContractValidator::new(&store);
    let missing = validator.validate(&ContractAssertion::new(foo, sig(&store, "volume", double()), top));
    assert_eq!(kind_of(missing), Some(ViolationKind::MissingMethod));

    let declared = validator.validate(&ContractAssertion::new(foo, sig(&store, "area", double()), top));
    assert_eq!(declared, Ok(()));
}

#[test]
fn test_shallower_path_revisits_node_cut_off_by_depth_limit() {
    // Foo -> L1 -> L2 -> X -> Y -> Target is too deep for a limit of 4, but
    // Foo -> M -> X -> Y -> Target fits. X is first reached along the long
    // path, where the walk below it is cut off.
    let store = DefinitionStore::new();
    let target = interface(&store, "Target");
    let y = interface(&store, "Y");
    let x = interface(&store, "X");
    let l2 = interface(&store, "L2");
    let l1 = interface(&store, "L1");
    let m = interface(&store, "M");
    let foo = class(&store, "Foo");
    store.set_heritage(y, None, vec![target]);
    store.set_heritage(x, None, vec![y]);
    store.set_heritage(l2, None, vec![x]);
    store.set_heritage(l1, None, vec![l2]);
    store.set_heritage(m, None, vec![x]);
    store.set_heritage(foo, None, vec![l1, m]);

    let validator = ContractValidator::new(&store).with_max_depth(4);
    assert!(validator.is_subtype(foo, target));
    assert!(!ContractValidator::new(&store).with_max_depth(3).is_subtype(foo, target));
}

#[test]
fn test_depth_limit_bounds_the_walk() {
    let store = DefinitionStore::new();
    let root = interface(&store, "Root");
    declare(&store, root, vec![sig(&store, "area", double())]);
    let mut current = root;
    for i in 0..5 {
        let next = interface(&store, &format!("L{i}"));
        store.set_heritage(next, None, vec![current]);
        current = next;
    }

    let area = sig(&store, "area", double());
    assert!(ContractValidator::new(&store).with_max_depth(5).is_subtype(current, root));
    assert!(!ContractValidator::new(&store).with_max_depth(4).is_subtype(current, root));
    assert!(ContractValidator::new(&store).with_max_depth(5).find_method(current, &area).is_some());
    assert!(ContractValidator::new(&store).with_max_depth(4).find_method(current, &area).is_none());
}
