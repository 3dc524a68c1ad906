//! Target naming for codebind.
//!
//! - [`NamespaceMappingTree`]: prefix trie rewriting dotted namespaces,
//!   keeping the unmapped suffix.
//! - [`split_camel_case`]: the tokenizer behind synthesized enum constants.
//! - [`binding`]: derives target identifiers from attribute metadata.
//!
//! The identifiers produced here end up in generated native headers, so
//! their spelling is part of the ABI: the same input must always produce
//! the same names.

pub mod binding;
mod case;
mod error;
mod namespace;

pub use binding::{
    binding_name_for, enum_binding, type_binding, BindingSymbol, EnumBinding, EnumConstant,
    EnumValue, SENTINEL_VALUE,
};
pub use case::split_camel_case;
pub use error::BindingError;
pub use namespace::{NamespaceMappingTree, NamespaceNormalization};
