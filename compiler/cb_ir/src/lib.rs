//! Codebind IR - Declaration Model
//!
//! This crate contains the input data model of the binding generator:
//! - `DeclaredType` and its members (methods, fields, enum members, nested types)
//! - `Attribute` / `AttributeSet` for binding metadata
//! - `DeclForest`, the decorated declaration forest delivered by the front end
//! - `validate`, the attribute validation pass run before construction
//!
//! # Design Philosophy
//!
//! - **Immutable input**: the forest is built once by the front end and only read afterwards.
//! - **Closed attributes**: metadata is a tagged enum resolved by pattern matching,
//!   never a string-keyed lookup.
//! - **Nesting by ownership**: nested declarations are members of their enclosing type.

mod attr;
mod decl;
mod forest;
mod validate;

pub use attr::{Attribute, AttributeSet};
pub use decl::{
    DeclKind, DeclaredType, EnumMemberDecl, FieldDecl, Member, MethodDecl, Param, Signature,
    TypeRef,
};
pub use forest::DeclForest;
pub use validate::{validate, ValidationError, ValidationReport};
