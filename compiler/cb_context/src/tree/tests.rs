use cb_ir::DeclaredType;
use pretty_assertions::assert_eq;

use super::*;

fn type_kind(decl: &DeclaredType) -> ContextKind<'_> {
    ContextKind::Type {
        decl,
        mapped_namespace: None,
    }
}

#[test]
fn add_root_twice_is_rejected() {
    let decl = DeclaredType::class("Document", "Lib");
    let mut tree = ContextTree::new();
    let id = tree.insert(type_kind(&decl));

    tree.add_root(id).unwrap();
    assert_eq!(
        tree.add_root(id),
        Err(ConfigError::AlreadyRegistered {
            context: "Lib.Document".into()
        })
    );
    assert_eq!(tree.roots(), [id]);
}

#[test]
fn ids_from_another_tree_are_rejected() {
    let decl = DeclaredType::class("Document", "Lib");
    let mut other = ContextTree::new();
    other.insert(type_kind(&decl));
    let foreign = other.insert(type_kind(&decl));

    let mut tree = ContextTree::new();
    let local = tree.insert(type_kind(&decl));
    assert_eq!(
        tree.add_root(foreign),
        Err(ConfigError::UnknownContext { context: 1 })
    );
    assert_eq!(
        tree.add_child(local, foreign),
        Err(ConfigError::UnknownContext { context: 1 })
    );
    assert_eq!(
        tree.add_child(foreign, local),
        Err(ConfigError::UnknownContext { context: 1 })
    );
    assert!(tree.roots().is_empty());
    assert_eq!(tree.get(local).parent(), None);
}

#[test]
fn parented_context_cannot_become_root() {
    let outer = DeclaredType::class("Outer", "Lib");
    let inner = DeclaredType::class("Inner", "Lib");
    let mut tree = ContextTree::new();
    let parent = tree.insert(type_kind(&outer));
    let child = tree.insert(type_kind(&inner));
    tree.add_child(parent, child).unwrap();

    for _ in 0..2 {
        assert_eq!(
            tree.add_root(child),
            Err(ConfigError::AlreadyParented {
                context: "Lib.Inner".into(),
                parent: "Lib.Outer".into(),
            })
        );
    }
}

#[test]
fn self_parent_is_rejected() {
    let decl = DeclaredType::class("Node", "Lib");
    let mut tree = ContextTree::new();
    let id = tree.insert(type_kind(&decl));
    assert_eq!(
        tree.add_child(id, id),
        Err(ConfigError::SelfParent {
            context: "Lib.Node".into()
        })
    );
    assert_eq!(tree.get(id).parent(), None);
}

#[test]
fn ancestor_cannot_become_child() {
    let a = DeclaredType::class("A", "");
    let b = DeclaredType::class("B", "");
    let mut tree = ContextTree::new();
    let a = tree.insert(type_kind(&a));
    let b = tree.insert(type_kind(&b));
    tree.add_child(a, b).unwrap();
    assert!(matches!(tree.add_child(b, a), Err(ConfigError::SelfParent { .. })));
}

#[test]
fn parent_link_is_set_once() {
    let decls = [
        DeclaredType::class("A", "Lib"),
        DeclaredType::class("B", "Lib"),
        DeclaredType::class("C", "Lib"),
    ];
    let mut tree = ContextTree::new();
    let ids: Vec<_> = decls.iter().map(|decl| tree.insert(type_kind(decl))).collect();

    tree.add_child(ids[0], ids[2]).unwrap();
    assert!(matches!(
        tree.add_child(ids[1], ids[2]),
        Err(ConfigError::AlreadyParented { .. })
    ));
    assert_eq!(tree.get(ids[2]).parent(), Some(ids[0]));
    assert!(tree.get(ids[1]).children().is_empty());
}

#[test]
fn root_cannot_become_child() {
    let a = DeclaredType::class("A", "Lib");
    let b = DeclaredType::class("B", "Lib");
    let mut tree = ContextTree::new();
    let a = tree.insert(type_kind(&a));
    let b = tree.insert(type_kind(&b));
    tree.add_root(b).unwrap();
    assert!(matches!(
        tree.add_child(a, b),
        Err(ConfigError::AlreadyRegistered { .. })
    ));
}

#[test]
fn pre_order_visits_roots_then_subtrees() {
    let decls = [
        DeclaredType::class("R1", ""),
        DeclaredType::class("C1", ""),
        DeclaredType::class("G1", ""),
        DeclaredType::class("C2", ""),
        DeclaredType::class("R2", ""),
    ];
    let mut tree = ContextTree::new();
    let ids: Vec<_> = decls.iter().map(|decl| tree.insert(type_kind(decl))).collect();
    tree.add_root(ids[0]).unwrap();
    tree.add_child(ids[0], ids[1]).unwrap();
    tree.add_child(ids[1], ids[2]).unwrap();
    tree.add_child(ids[0], ids[3]).unwrap();
    tree.add_root(ids[4]).unwrap();

    let names: Vec<_> = tree.pre_order().into_iter().map(|id| tree.name(id)).collect();
    assert_eq!(names, ["R1", "C1", "G1", "C2", "R2"]);
    assert_eq!(tree.ancestors(ids[2]).collect::<Vec<_>>(), [ids[1], ids[0]]);
}

#[test]
fn module_child_defers_name_to_parent() {
    let decl = DeclaredType::class("Printer", "Lib");
    let mut tree = ContextTree::new();
    let origin = tree.insert(type_kind(&decl));
    let parent = tree.insert(ContextKind::ModuleParent {
        name: "Printing".into(),
    });
    let child = tree.insert(ContextKind::ModuleChild {
        origin,
        methods: Vec::new(),
    });
    tree.add_root(parent).unwrap();
    tree.add_child(parent, child).unwrap();

    assert_eq!(tree.name(child), "Printing");
    assert_eq!(tree.get(child).decl(), None);
    assert_eq!(tree.get(origin).decl(), Some(&decl));
}
