//! Module registry.
//!
//! A module groups the native methods of every declaration tagged with the
//! same module name into one exported surface. The first sighting of a name
//! creates a `ModuleParent` root; each declaration then contributes its own
//! `ModuleChild` under it. The parent's method list is the concatenation of
//! its children's, in registration order, and is never re-sorted.

use cb_ir::MethodDecl;
use rustc_hash::FxHashMap;

use crate::error::ConfigError;
use crate::tree::{ContextId, ContextKind, ContextTree};

#[derive(Debug, Default)]
pub struct ModuleRegistry {
    by_name: FxHashMap<String, ContextId>,
    /// Parent contexts in first-sighting order.
    order: Vec<ContextId>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the parent context for `name` and register it as a root.
    ///
    /// Fails if the name is already taken; declarations should go through
    /// [`attach`](Self::attach) instead.
    pub fn register(&mut self, tree: &mut ContextTree<'_>, name: &str) -> Result<ContextId, ConfigError> {
        if self.by_name.contains_key(name) {
            return Err(ConfigError::DuplicateModule {
                module: name.to_string(),
            });
        }

        let parent = tree.insert(ContextKind::ModuleParent {
            name: name.to_string(),
        });
        tree.add_root(parent)?;
        self.by_name.insert(name.to_string(), parent);
        self.order.push(parent);
        tracing::debug!(module = name, "registered module");
        Ok(parent)
    }

    /// Add the methods `origin` contributes to module `name`, creating the
    /// module on first sighting. Returns the new child context.
    pub fn attach<'d>(
        &mut self,
        tree: &mut ContextTree<'d>,
        name: &str,
        origin: ContextId,
        methods: Vec<&'d MethodDecl>,
    ) -> Result<ContextId, ConfigError> {
        let parent = match self.by_name.get(name) {
            Some(&parent) => parent,
            None => self.register(tree, name)?,
        };

        tracing::trace!(
            module = name,
            origin = tree.name(origin),
            methods = methods.len(),
            "attached module child"
        );
        let child = tree.insert(ContextKind::ModuleChild { origin, methods });
        tree.add_child(parent, child)?;
        Ok(child)
    }

    pub fn get(&self, name: &str) -> Option<ContextId> {
        self.by_name.get(name).copied()
    }

    /// Module parents in first-sighting order.
    pub fn modules(&self) -> &[ContextId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Exported methods of the module rooted at `parent`, in discovery order.
pub fn module_methods<'d>(tree: &ContextTree<'d>, parent: ContextId) -> Vec<&'d MethodDecl> {
    tree.get(parent)
        .children()
        .iter()
        .filter_map(|&child| match tree.get(child).kind() {
            ContextKind::ModuleChild { methods, .. } => Some(methods.iter().copied()),
            _ => None,
        })
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests;
