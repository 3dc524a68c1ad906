//! One-pass construction of the compilation aggregate.
//!
//! The forest is walked front to back exactly once. Each non-ignored
//! declaration gets a type context (a root, or a child of its enclosing
//! type), its namespace is mapped through the trie, it is filed into the
//! catalogues, and, when tagged with a module name, its native methods are
//! attached to that module. Conversions are requested from the target only
//! after the walk, when module method lists are final.

use cb_ir::{DeclForest, DeclKind, DeclaredType, MethodDecl};
use cb_naming::{NamespaceMappingTree, NamespaceNormalization};
use rustc_hash::FxHashSet;

use crate::aggregate::CompilationAggregate;
use crate::conversion::Target;
use crate::error::ConfigError;
use crate::module::ModuleRegistry;
use crate::tree::{ContextId, ContextKind, ContextTree};

/// Builder for a [`CompilationAggregate`].
pub struct Collector<'d> {
    forest: &'d DeclForest,
    tree: ContextTree<'d>,
    modules: ModuleRegistry,
    namespace_mappings: NamespaceMappingTree,
    normalization: NamespaceNormalization,
    enums: Vec<&'d DeclaredType>,
    callbacks: Vec<&'d DeclaredType>,
    opaque_types: Vec<&'d DeclaredType>,
    struct_types: Vec<&'d DeclaredType>,
    namespaces: Vec<&'d str>,
    seen_namespaces: FxHashSet<&'d str>,
}

impl<'d> Collector<'d> {
    pub fn new(forest: &'d DeclForest) -> Self {
        Collector {
            forest,
            tree: ContextTree::new(),
            modules: ModuleRegistry::new(),
            namespace_mappings: NamespaceMappingTree::new(),
            normalization: NamespaceNormalization::default(),
            enums: Vec::new(),
            callbacks: Vec::new(),
            opaque_types: Vec::new(),
            struct_types: Vec::new(),
            namespaces: Vec::new(),
            seen_namespaces: FxHashSet::default(),
        }
    }

    /// Map source namespace `source` (and everything below it) to `target`.
    #[must_use]
    pub fn with_namespace_mapping(mut self, source: &str, target: impl Into<String>) -> Self {
        self.namespace_mappings.push_mapping(source, target);
        self
    }

    #[must_use]
    pub fn with_normalization(mut self, normalization: NamespaceNormalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Walk the forest and attach the target's conversions.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(library = %self.forest.library_name, target = target.name())
    )]
    pub fn collect(mut self, target: &dyn Target) -> Result<CompilationAggregate<'d>, ConfigError> {
        let forest = self.forest;
        for decl in &forest.types {
            self.visit(decl, None)?;
        }

        let mut aggregate = CompilationAggregate {
            library_name: &forest.library_name,
            tree: self.tree,
            modules: self.modules,
            namespace_mappings: self.namespace_mappings,
            normalization: self.normalization,
            enums: self.enums,
            callbacks: self.callbacks,
            opaque_types: self.opaque_types,
            struct_types: self.struct_types,
            namespaces: self.namespaces,
            default_conversions: Vec::new(),
        };

        let per_context: Vec<_> = aggregate
            .tree
            .pre_order()
            .into_iter()
            .map(|id| (id, target.context_conversions(&aggregate, id)))
            .collect();
        for (id, conversions) in per_context {
            aggregate.tree.set_conversions(id, conversions);
        }
        aggregate.default_conversions = target.default_conversions(&aggregate);

        tracing::debug!(
            contexts = aggregate.tree.len(),
            modules = aggregate.modules.len(),
            outputs = aggregate.manifest().len(),
            "collected"
        );
        Ok(aggregate)
    }

    fn visit(&mut self, decl: &'d DeclaredType, parent: Option<ContextId>) -> Result<(), ConfigError> {
        if decl.attributes.is_ignored() {
            tracing::trace!(name = %decl.identifier, "skipping ignored declaration");
            return Ok(());
        }
        tracing::trace!(name = %decl.identifier, kind = %decl.kind, "visit");

        let mapped_namespace = self
            .namespace_mappings
            .get_mapped_namespace(&decl.namespace, self.normalization);
        let id = self.tree.insert(ContextKind::Type {
            decl,
            mapped_namespace,
        });
        match parent {
            Some(parent) => self.tree.add_child(parent, id)?,
            None => self.tree.add_root(id)?,
        }

        self.record_namespace(&decl.namespace);
        self.catalogue(decl);

        if let Some(module) = decl.attributes.module_name() {
            let methods: Vec<&'d MethodDecl> = decl
                .methods()
                .filter(|method| method.is_native && !method.attributes.is_ignored())
                .collect();
            self.modules.attach(&mut self.tree, module, id, methods)?;
        }

        for nested in decl.nested_types() {
            self.visit(nested, Some(id))?;
        }
        Ok(())
    }

    fn record_namespace(&mut self, namespace: &'d str) {
        if !namespace.is_empty() && self.seen_namespaces.insert(namespace) {
            self.namespaces.push(namespace);
        }
    }

    fn catalogue(&mut self, decl: &'d DeclaredType) {
        let bound = decl.attributes.explicit_binding().is_some();
        match decl.kind {
            DeclKind::Enum if bound => self.enums.push(decl),
            DeclKind::Delegate => self.callbacks.push(decl),
            DeclKind::Class | DeclKind::Interface if bound => self.opaque_types.push(decl),
            DeclKind::Struct if bound => self.struct_types.push(decl),
            _ => {}
        }
    }
}
