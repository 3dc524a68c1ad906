use super::*;

#[test]
fn qualified_name_joins_namespace() {
    let decl = DeclaredType::class("Document", "SampleLibrary.Core");
    assert_eq!(decl.qualified_name(), "SampleLibrary.Core.Document");

    let global = DeclaredType::class("Document", "");
    assert_eq!(global.qualified_name(), "Document");
}

#[test]
fn member_filters_keep_declaration_order() {
    let decl = DeclaredType::class("Document", "Lib")
        .with_method(MethodDecl::native("open"))
        .with_member(Member::Field(FieldDecl::new("handle", TypeRef::named("void*"))))
        .with_nested(DeclaredType::class("Page", "Lib"))
        .with_method(MethodDecl::managed("close"));

    let methods: Vec<_> = decl.methods().map(|m| m.name.as_str()).collect();
    assert_eq!(methods, ["open", "close"]);
    assert_eq!(decl.fields().count(), 1);
    assert_eq!(decl.nested_types().count(), 1);
    assert_eq!(decl.members[1].name(), "handle");
}

#[test]
fn enum_members_in_order() {
    let decl = DeclaredType::enumeration("PageKind", "Lib")
        .with_enum_member("Landscape", 0)
        .with_enum_member("Portrait", 1);

    let members: Vec<_> = decl.enum_members().map(|m| (m.name.as_str(), m.value)).collect();
    assert_eq!(members, [("Landscape", 0), ("Portrait", 1)]);
}

#[test]
fn delegate_carries_signature() {
    let sig = Signature::new(
        TypeRef::predefined("int"),
        vec![Param::new("value", TypeRef::predefined("int"))],
    );
    let decl = DeclaredType::delegate("Callback", "Lib", sig.clone());
    assert_eq!(decl.kind, DeclKind::Delegate);
    assert_eq!(decl.signature, Some(sig));
    assert_eq!(decl.kind.to_string(), "delegate");
}

#[test]
fn managed_method_is_not_native() {
    let method = MethodDecl::managed("Dispose").with_attribute(Attribute::Ignore);
    assert!(!method.is_native);
    assert!(method.attributes.is_ignored());
    assert_eq!(method.signature.return_type, TypeRef::void());
}
