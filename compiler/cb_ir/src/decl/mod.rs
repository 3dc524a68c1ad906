//! Declared types and their members.
//!
//! These mirror what the front end resolved from source: kind, identifier,
//! containing namespace, attributes, and the member list. Nested declarations
//! are owned by their enclosing type through `Member::Type`.

use std::fmt;

use crate::attr::{Attribute, AttributeSet};

/// Kind of a declared type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Class,
    Struct,
    Enum,
    Delegate,
    Interface,
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeclKind::Class => "class",
            DeclKind::Struct => "struct",
            DeclKind::Enum => "enum",
            DeclKind::Delegate => "delegate",
            DeclKind::Interface => "interface",
        };
        f.write_str(name)
    }
}

/// Reference to a type in a signature or field.
///
/// `Predefined` names a source-language builtin (`int`, `bool`, `string`, ...)
/// that each target maps on its own. `Named` is an already-bound identifier
/// and is emitted unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Predefined(String),
    Named(String),
}

impl TypeRef {
    pub fn predefined(name: impl Into<String>) -> Self {
        TypeRef::Predefined(name.into())
    }

    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn void() -> Self {
        TypeRef::Predefined("void".to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Param {
            name: name.into(),
            ty,
        }
    }
}

/// Return type and parameter list of a method or delegate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    pub return_type: TypeRef,
    pub params: Vec<Param>,
}

impl Default for Signature {
    fn default() -> Self {
        Signature {
            return_type: TypeRef::void(),
            params: Vec::new(),
        }
    }
}

impl Signature {
    pub fn new(return_type: TypeRef, params: Vec<Param>) -> Self {
        Signature {
            return_type,
            params,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodDecl {
    pub name: String,
    /// Whether the method is an extern/native entry point.
    pub is_native: bool,
    pub signature: Signature,
    pub attributes: AttributeSet,
}

impl MethodDecl {
    /// A native method with an empty `void()` signature.
    pub fn native(name: impl Into<String>) -> Self {
        MethodDecl {
            name: name.into(),
            is_native: true,
            signature: Signature::default(),
            attributes: AttributeSet::new(),
        }
    }

    /// A managed (non-native) method.
    pub fn managed(name: impl Into<String>) -> Self {
        MethodDecl {
            is_native: false,
            ..MethodDecl::native(name)
        }
    }

    #[must_use]
    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = signature;
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attr: Attribute) -> Self {
        self.attributes.push(attr);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldDecl {
    pub name: String,
    pub ty: TypeRef,
    pub attributes: AttributeSet,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        FieldDecl {
            name: name.into(),
            ty,
            attributes: AttributeSet::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumMemberDecl {
    pub name: String,
    pub value: i64,
    pub attributes: AttributeSet,
}

impl EnumMemberDecl {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        EnumMemberDecl {
            name: name.into(),
            value,
            attributes: AttributeSet::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, attr: Attribute) -> Self {
        self.attributes.push(attr);
        self
    }
}

/// One member of a declared type, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Member {
    Method(MethodDecl),
    Field(FieldDecl),
    EnumMember(EnumMemberDecl),
    Type(DeclaredType),
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Member::Method(method) => &method.name,
            Member::Field(field) => &field.name,
            Member::EnumMember(member) => &member.name,
            Member::Type(decl) => &decl.identifier,
        }
    }

    pub fn attributes(&self) -> &AttributeSet {
        match self {
            Member::Method(method) => &method.attributes,
            Member::Field(field) => &field.attributes,
            Member::EnumMember(member) => &member.attributes,
            Member::Type(decl) => &decl.attributes,
        }
    }
}

/// A semantically resolved type declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeclaredType {
    pub kind: DeclKind,
    pub identifier: String,
    /// Dotted containing namespace; empty for the global namespace.
    pub namespace: String,
    pub attributes: AttributeSet,
    pub members: Vec<Member>,
    /// Present for delegates.
    pub signature: Option<Signature>,
}

impl DeclaredType {
    pub fn new(kind: DeclKind, identifier: impl Into<String>, namespace: impl Into<String>) -> Self {
        DeclaredType {
            kind,
            identifier: identifier.into(),
            namespace: namespace.into(),
            attributes: AttributeSet::new(),
            members: Vec::new(),
            signature: None,
        }
    }

    pub fn class(identifier: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self::new(DeclKind::Class, identifier, namespace)
    }

    pub fn enumeration(identifier: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self::new(DeclKind::Enum, identifier, namespace)
    }

    pub fn delegate(
        identifier: impl Into<String>,
        namespace: impl Into<String>,
        signature: Signature,
    ) -> Self {
        DeclaredType {
            signature: Some(signature),
            ..Self::new(DeclKind::Delegate, identifier, namespace)
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, attr: Attribute) -> Self {
        self.attributes.push(attr);
        self
    }

    #[must_use]
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    #[must_use]
    pub fn with_method(self, method: MethodDecl) -> Self {
        self.with_member(Member::Method(method))
    }

    #[must_use]
    pub fn with_enum_member(self, name: impl Into<String>, value: i64) -> Self {
        self.with_member(Member::EnumMember(EnumMemberDecl::new(name, value)))
    }

    #[must_use]
    pub fn with_nested(self, nested: DeclaredType) -> Self {
        self.with_member(Member::Type(nested))
    }

    /// `namespace.identifier`, or just the identifier in the global namespace.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.identifier.clone()
        } else {
            format!("{}.{}", self.namespace, self.identifier)
        }
    }

    /// Enum members in declaration order.
    pub fn enum_members(&self) -> impl Iterator<Item = &EnumMemberDecl> {
        self.members.iter().filter_map(|member| match member {
            Member::EnumMember(item) => Some(item),
            _ => None,
        })
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|member| match member {
            Member::Method(method) => Some(method),
            _ => None,
        })
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(|member| match member {
            Member::Field(field) => Some(field),
            _ => None,
        })
    }

    pub fn nested_types(&self) -> impl Iterator<Item = &DeclaredType> {
        self.members.iter().filter_map(|member| match member {
            Member::Type(decl) => Some(decl),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests;
