use cb_ir::{DeclaredType, MethodDecl};
use pretty_assertions::assert_eq;

use super::*;

fn type_context<'d>(tree: &mut ContextTree<'d>, decl: &'d DeclaredType) -> ContextId {
    let id = tree.insert(ContextKind::Type {
        decl,
        mapped_namespace: None,
    });
    tree.add_root(id).unwrap();
    id
}

#[test]
fn first_sighting_creates_root_parent() {
    let decl = DeclaredType::class("Printer", "Lib");
    let m1 = MethodDecl::native("m1");
    let mut tree = ContextTree::new();
    let mut modules = ModuleRegistry::new();
    let origin = type_context(&mut tree, &decl);

    let child = modules.attach(&mut tree, "Foo", origin, vec![&m1]).unwrap();
    let parent = modules.get("Foo").unwrap();

    assert_eq!(tree.roots(), [origin, parent]);
    assert_eq!(tree.get(child).parent(), Some(parent));
    assert_eq!(modules.modules(), [parent]);
}

#[test]
fn methods_concatenate_in_discovery_order() {
    let first = DeclaredType::class("A", "Lib");
    let second = DeclaredType::class("B", "Lib");
    let (m1, m2, m3) = (
        MethodDecl::native("m1"),
        MethodDecl::native("m2"),
        MethodDecl::native("m3"),
    );
    let mut tree = ContextTree::new();
    let mut modules = ModuleRegistry::new();
    let a = type_context(&mut tree, &first);
    let b = type_context(&mut tree, &second);

    modules.attach(&mut tree, "Foo", a, vec![&m1, &m3]).unwrap();
    modules.attach(&mut tree, "Foo", b, vec![&m2]).unwrap();

    let parent = modules.get("Foo").unwrap();
    let names: Vec<_> = module_methods(&tree, parent)
        .into_iter()
        .map(|method| method.name.as_str())
        .collect();
    assert_eq!(names, ["m1", "m3", "m2"]);
    assert_eq!(modules.len(), 1);
    assert_eq!(tree.get(parent).children().len(), 2);
}

#[test]
fn direct_duplicate_registration_is_rejected() {
    let mut tree = ContextTree::new();
    let mut modules = ModuleRegistry::new();
    modules.register(&mut tree, "Foo").unwrap();
    assert_eq!(
        modules.register(&mut tree, "Foo"),
        Err(ConfigError::DuplicateModule {
            module: "Foo".into()
        })
    );
    assert_eq!(tree.roots().len(), 1);
}

#[test]
fn empty_contribution_still_attaches_child() {
    let decl = DeclaredType::class("Empty", "Lib");
    let mut tree = ContextTree::new();
    let mut modules = ModuleRegistry::new();
    let origin = type_context(&mut tree, &decl);
    modules.attach(&mut tree, "Bar", origin, Vec::new()).unwrap();

    let parent = modules.get("Bar").unwrap();
    assert!(module_methods(&tree, parent).is_empty());
    assert_eq!(tree.name(parent), "Bar");
}
