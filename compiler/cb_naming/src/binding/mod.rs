//! Attribute-driven binding names.
//!
//! Resolution order for every symbol:
//! 1. `ExplicitBinding(name)` is used verbatim.
//! 2. Enum members: the owning enum's `Substitution` rewrites the member
//!    identifier into a single token; without one the identifier is split at
//!    camel-case boundaries.
//! 3. Tokens are upper-cased, joined with `_`, and prefixed with `<STEM>_`.
//!
//! Substitution replacements use numbered group references: `$N` is always
//! group `N`, so `$1_$2` reads as group 1, `_`, group 2. `${name}` and `$$`
//! keep their `regex` meaning.
//!
//! Types and callbacks without an explicit binding keep their source
//! identifier. Members tagged `Ignore` produce nothing and take no slot.

use std::fmt;

use cb_ir::{DeclaredType, EnumMemberDecl};
use regex::Regex;
use smallvec::{smallvec, SmallVec};

use crate::case::split_camel_case;
use crate::error::BindingError;

/// Value of the trailing sentinel constant that pins enums to 32 bits.
///
/// Negative-valued and wider enums are not accounted for.
pub const SENTINEL_VALUE: u32 = 0xFFFF_FFFF;

/// Value of a generated enum constant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EnumValue {
    Declared(i64),
    Sentinel,
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumValue::Declared(value) => write!(f, "{value}"),
            EnumValue::Sentinel => write!(f, "0x{SENTINEL_VALUE:X}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumConstant {
    pub name: String,
    pub value: EnumValue,
}

/// Fully resolved naming of one enum.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumBinding {
    /// Target type name.
    pub name: String,
    pub stem: String,
    /// Surviving members, in declaration order.
    pub constants: Vec<EnumConstant>,
    /// `__<STEM>__ = 0xFFFFFFFF`, always emitted after the members.
    pub sentinel: EnumConstant,
}

impl EnumBinding {
    /// Members followed by the sentinel.
    pub fn all_constants(&self) -> impl Iterator<Item = &EnumConstant> {
        self.constants.iter().chain(std::iter::once(&self.sentinel))
    }
}

/// A symbol whose binding name can be asked for.
#[derive(Copy, Clone, Debug)]
pub enum BindingSymbol<'a> {
    /// Type, callback, or enum declaration.
    Type(&'a DeclaredType),
    /// Member of the given enum.
    EnumMember {
        owner: &'a DeclaredType,
        member: &'a EnumMemberDecl,
    },
}

/// Target identifier of `symbol`; `None` when the symbol is ignored.
pub fn binding_name_for(symbol: BindingSymbol<'_>) -> Result<Option<String>, BindingError> {
    match symbol {
        BindingSymbol::Type(decl) => {
            if decl.attributes.is_ignored() {
                return Ok(None);
            }
            Ok(Some(type_binding(decl).to_string()))
        }
        BindingSymbol::EnumMember { owner, member } => {
            if member.attributes.is_ignored() {
                return Ok(None);
            }
            if let Some(explicit) = member.attributes.explicit_binding() {
                return Ok(Some(explicit.to_string()));
            }
            let naming = MemberNaming::for_enum(owner)?;
            Ok(Some(naming.identifier(member)))
        }
    }
}

/// Explicit binding or, failing that, the source identifier.
pub fn type_binding(decl: &DeclaredType) -> &str {
    decl.attributes
        .explicit_binding()
        .unwrap_or(decl.identifier.as_str())
}

/// Resolve every constant of `decl`, sentinel included.
#[tracing::instrument(level = "trace", skip_all, fields(name = %decl.identifier))]
pub fn enum_binding(decl: &DeclaredType) -> Result<EnumBinding, BindingError> {
    let naming = MemberNaming::for_enum(decl)?;
    let constants = decl
        .enum_members()
        .filter(|member| !member.attributes.is_ignored())
        .map(|member| EnumConstant {
            name: naming.identifier(member),
            value: EnumValue::Declared(member.value),
        })
        .collect();

    Ok(EnumBinding {
        name: type_binding(decl).to_string(),
        stem: naming.stem.to_string(),
        constants,
        sentinel: EnumConstant {
            name: format!("__{}__", naming.stem),
            value: EnumValue::Sentinel,
        },
    })
}

/// Per-enum naming state: stem plus the compiled substitution, if any.
struct MemberNaming<'a> {
    stem: &'a str,
    substitution: Option<(Regex, String)>,
}

impl<'a> MemberNaming<'a> {
    fn for_enum(decl: &'a DeclaredType) -> Result<Self, BindingError> {
        let stem = decl
            .attributes
            .stem()
            .ok_or_else(|| BindingError::MissingStem {
                enum_name: decl.qualified_name(),
            })?;

        let substitution = match decl.attributes.substitution() {
            Some((pattern, replacement)) => {
                let regex = Regex::new(pattern).map_err(|err| BindingError::InvalidSubstitution {
                    enum_name: decl.qualified_name(),
                    pattern: pattern.to_string(),
                    message: err.to_string(),
                })?;
                Some((regex, numbered_group_refs(replacement)))
            }
            None => None,
        };

        Ok(MemberNaming { stem, substitution })
    }

    fn identifier(&self, member: &EnumMemberDecl) -> String {
        if let Some(explicit) = member.attributes.explicit_binding() {
            return explicit.to_string();
        }

        let substituted;
        let tokens: SmallVec<[&str; 4]> = match &self.substitution {
            Some((regex, replacement)) => {
                substituted = regex.replace_all(&member.name, replacement.as_str());
                smallvec![&*substituted]
            }
            None => split_camel_case(&member.name),
        };

        let mut identifier = String::with_capacity(self.stem.len() + member.name.len() + 8);
        identifier.push_str(self.stem);
        identifier.push('_');
        for (i, token) in tokens.iter().enumerate() {
            if i != 0 {
                identifier.push('_');
            }
            identifier.push_str(&token.to_uppercase());
        }
        identifier
    }
}

/// Brace every `$N` so digits are never read together with the text after
/// them as one group name.
fn numbered_group_refs(replacement: &str) -> String {
    let mut expanded = String::with_capacity(replacement.len() + 4);
    let mut rest = replacement;
    while let Some(pos) = rest.find('$') {
        expanded.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        if let Some(tail) = after.strip_prefix('$') {
            expanded.push_str("$$");
            rest = tail;
            continue;
        }

        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            expanded.push('$');
        } else {
            expanded.push_str("${");
            expanded.push_str(&after[..digits]);
            expanded.push('}');
        }
        rest = &after[digits..];
    }
    expanded.push_str(rest);
    expanded
}
