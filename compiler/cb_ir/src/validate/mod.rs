//! Attribute validation.
//!
//! Checks the metadata invariants the binding core relies on and collects
//! every violation instead of failing fast, so the user sees one report.

use std::fmt;

use crate::attr::{Attribute, AttributeSet};
use crate::decl::{DeclKind, DeclaredType, Member};
use crate::forest::DeclForest;

/// One attribute misuse on a declaration or member.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{symbol}: {message}")]
pub struct ValidationError {
    /// Qualified name of the offending symbol.
    pub symbol: String,
    pub message: String,
}

/// Aggregated validation failures, rendered as one multi-line report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    fn push(&mut self, symbol: &str, message: impl Into<String>) {
        self.errors.push(ValidationError {
            symbol: symbol.to_string(),
            message: message.into(),
        });
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation errors:", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Validate every declaration of the forest.
pub fn validate(forest: &DeclForest) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::default();
    for decl in &forest.types {
        validate_type(decl, &mut report);
    }

    if report.is_empty() {
        Ok(())
    } else {
        Err(report)
    }
}

fn validate_type(decl: &DeclaredType, report: &mut ValidationReport) {
    let symbol = decl.qualified_name();
    check_attributes(&symbol, Some(decl.kind), &decl.attributes, report);
    if decl.kind == DeclKind::Delegate && decl.signature.is_none() {
        report.push(&symbol, "delegate declared without a signature");
    }

    for member in &decl.members {
        match member {
            Member::Type(nested) => validate_type(nested, report),
            Member::Method(_) | Member::Field(_) | Member::EnumMember(_) => {
                let member_symbol = format!("{symbol}.{}", member.name());
                check_attributes(&member_symbol, None, member.attributes(), report);
            }
        }
    }
}

/// `kind` is `None` for members, which only accept bindings and `Ignore`.
fn check_attributes(
    symbol: &str,
    kind: Option<DeclKind>,
    attrs: &AttributeSet,
    report: &mut ValidationReport,
) {
    for attr in attrs.iter() {
        let misplaced = match attr {
            Attribute::ExplicitBinding(name) => {
                if name.is_empty() {
                    report.push(symbol, "explicit binding name is empty");
                }
                false
            }
            Attribute::Stem(_) | Attribute::Substitution { .. } => kind != Some(DeclKind::Enum),
            Attribute::ModuleName(_) => {
                !matches!(kind, Some(DeclKind::Class | DeclKind::Struct))
            }
            Attribute::Ignore => false,
        };
        if misplaced {
            report.push(
                symbol,
                format!("attribute {} is not allowed here", attr.kind_name()),
            );
        }
    }

    for probe in [
        Attribute::ExplicitBinding(String::new()),
        Attribute::Stem(String::new()),
        Attribute::ModuleName(String::new()),
        Attribute::Substitution {
            pattern: String::new(),
            replacement: String::new(),
        },
    ] {
        if attrs.count_like(&probe) > 1 {
            report.push(
                symbol,
                format!("attribute {} declared more than once", probe.kind_name()),
            );
        }
    }
}
