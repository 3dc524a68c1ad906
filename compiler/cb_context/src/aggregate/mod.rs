//! The compilation aggregate: read-only result of one construction pass.

use cb_ir::{DeclaredType, MethodDecl};
use cb_naming::{NamespaceMappingTree, NamespaceNormalization};

use crate::conversion::Conversion;
use crate::module::{module_methods, ModuleRegistry};
use crate::tree::{ContextId, ContextTree, TypeContext};

/// Context forest, module registry, catalogues and output manifest of a
/// single conversion run.
///
/// Built by [`Collector`](crate::Collector); immutable afterwards and safe
/// to share across writer threads.
#[derive(Debug)]
pub struct CompilationAggregate<'d> {
    pub(crate) library_name: &'d str,
    pub(crate) tree: ContextTree<'d>,
    pub(crate) modules: ModuleRegistry,
    pub(crate) namespace_mappings: NamespaceMappingTree,
    pub(crate) normalization: NamespaceNormalization,
    pub(crate) enums: Vec<&'d DeclaredType>,
    pub(crate) callbacks: Vec<&'d DeclaredType>,
    pub(crate) opaque_types: Vec<&'d DeclaredType>,
    pub(crate) struct_types: Vec<&'d DeclaredType>,
    pub(crate) namespaces: Vec<&'d str>,
    pub(crate) default_conversions: Vec<Conversion>,
}

impl<'d> CompilationAggregate<'d> {
    /// Native library the bindings load.
    pub fn library_name(&self) -> &'d str {
        self.library_name
    }

    pub fn tree(&self) -> &ContextTree<'d> {
        &self.tree
    }

    pub fn context(&self, id: ContextId) -> &TypeContext<'d> {
        self.tree.get(id)
    }

    pub fn modules(&self) -> &ModuleRegistry {
        &self.modules
    }

    /// Parent context of module `name`.
    pub fn module(&self, name: &str) -> Option<ContextId> {
        self.modules.get(name)
    }

    /// Exported methods of module `name`, in discovery order.
    pub fn module_methods(&self, name: &str) -> Option<Vec<&'d MethodDecl>> {
        self.modules
            .get(name)
            .map(|parent| module_methods(&self.tree, parent))
    }

    pub fn namespace_mappings(&self) -> &NamespaceMappingTree {
        &self.namespace_mappings
    }

    pub fn normalization(&self) -> NamespaceNormalization {
        self.normalization
    }

    /// Enums carrying an explicit binding.
    pub fn enums(&self) -> &[&'d DeclaredType] {
        &self.enums
    }

    /// Delegates that are not ignored.
    pub fn callbacks(&self) -> &[&'d DeclaredType] {
        &self.callbacks
    }

    /// Classes and interfaces carrying an explicit binding.
    pub fn opaque_types(&self) -> &[&'d DeclaredType] {
        &self.opaque_types
    }

    /// Structs carrying an explicit binding.
    pub fn struct_types(&self) -> &[&'d DeclaredType] {
        &self.struct_types
    }

    /// Distinct non-empty source namespaces, in discovery order.
    pub fn namespaces(&self) -> &[&'d str] {
        &self.namespaces
    }

    pub fn default_conversions(&self) -> &[Conversion] {
        &self.default_conversions
    }

    /// Every output: context conversions in tree pre-order, then the
    /// defaults.
    pub fn manifest(&self) -> Vec<&Conversion> {
        self.tree
            .pre_order()
            .into_iter()
            .flat_map(|id| self.tree.get(id).conversions())
            .chain(&self.default_conversions)
            .collect()
    }
}
