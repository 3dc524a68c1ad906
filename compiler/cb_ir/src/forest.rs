//! The decorated declaration forest.

use crate::decl::DeclaredType;

/// Root declarations of one conversion run, in discovery order.
///
/// Produced by the front end after its own validation and replacement
/// phases; immutable afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DeclForest {
    /// Native library name, used by targets for export macros.
    pub library_name: String,
    pub types: Vec<DeclaredType>,
}

impl DeclForest {
    pub fn new(library_name: impl Into<String>) -> Self {
        DeclForest {
            library_name: library_name.into(),
            types: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_type(mut self, decl: DeclaredType) -> Self {
        self.types.push(decl);
        self
    }

    pub fn push(&mut self, decl: DeclaredType) {
        self.types.push(decl);
    }

    /// Total number of declarations, nested ones included.
    pub fn declaration_count(&self) -> usize {
        fn count(decl: &DeclaredType) -> usize {
            1 + decl.nested_types().map(count).sum::<usize>()
        }
        self.types.iter().map(count).sum()
    }
}
