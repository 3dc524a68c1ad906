//! Binding metadata attached to declarations and members.

use smallvec::SmallVec;

/// One piece of binding metadata.
///
/// The set is closed: every consumer matches on these variants directly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Target identifier used verbatim for the symbol.
    ExplicitBinding(String),
    /// Prefix used when synthesizing enum member identifiers.
    Stem(String),
    /// Regex substitution applied to enum member identifiers.
    Substitution { pattern: String, replacement: String },
    /// The symbol is skipped entirely.
    Ignore,
    /// The declaration contributes its native methods to the named module.
    ModuleName(String),
}

impl Attribute {
    /// Short name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Attribute::ExplicitBinding(_) => "ExplicitBinding",
            Attribute::Stem(_) => "Stem",
            Attribute::Substitution { .. } => "Substitution",
            Attribute::Ignore => "Ignore",
            Attribute::ModuleName(_) => "ModuleName",
        }
    }
}

/// Ordered attribute list of a single declaration or member.
///
/// Most declarations carry zero to two attributes, so the list is stored inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AttributeSet {
    attrs: SmallVec<[Attribute; 2]>,
}

impl AttributeSet {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute, keeping declaration order.
    pub fn push(&mut self, attr: Attribute) {
        self.attrs.push(attr);
    }

    /// Builder-style append.
    #[must_use]
    pub fn with(mut self, attr: Attribute) -> Self {
        self.push(attr);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.iter()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// The explicit binding name, if any.
    ///
    /// Validation guarantees at most one; the first one wins otherwise.
    pub fn explicit_binding(&self) -> Option<&str> {
        self.attrs.iter().find_map(|attr| match attr {
            Attribute::ExplicitBinding(name) => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn stem(&self) -> Option<&str> {
        self.attrs.iter().find_map(|attr| match attr {
            Attribute::Stem(prefix) => Some(prefix.as_str()),
            _ => None,
        })
    }

    /// The `(pattern, replacement)` pair of a substitution attribute.
    pub fn substitution(&self) -> Option<(&str, &str)> {
        self.attrs.iter().find_map(|attr| match attr {
            Attribute::Substitution {
                pattern,
                replacement,
            } => Some((pattern.as_str(), replacement.as_str())),
            _ => None,
        })
    }

    pub fn module_name(&self) -> Option<&str> {
        self.attrs.iter().find_map(|attr| match attr {
            Attribute::ModuleName(name) => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn is_ignored(&self) -> bool {
        self.attrs.iter().any(|attr| matches!(attr, Attribute::Ignore))
    }

    /// Number of attributes of the same variant as `probe`.
    pub fn count_like(&self, probe: &Attribute) -> usize {
        self.attrs
            .iter()
            .filter(|attr| std::mem::discriminant(*attr) == std::mem::discriminant(probe))
            .count()
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Self {
            attrs: iter.into_iter().collect(),
        }
    }
}
