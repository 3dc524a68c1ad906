//! Arena-backed context tree.
//!
//! Contexts live in one `Vec` owned by the tree and are addressed by
//! [`ContextId`]. A context lists its children by id and keeps its parent as
//! a plain id, so ownership stays strictly top-down.

use cb_ir::{DeclaredType, MethodDecl};

use crate::conversion::Conversion;
use crate::error::ConfigError;

/// Index of a context in its [`ContextTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextId(u32);

impl ContextId {
    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        ContextId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// What a context stands for.
#[derive(Debug)]
pub enum ContextKind<'d> {
    /// One declared type.
    Type {
        decl: &'d DeclaredType,
        /// Target namespace after trie mapping; `None` when unmapped.
        mapped_namespace: Option<String>,
    },
    /// Named module surface, always a root.
    ModuleParent { name: String },
    /// Native methods contributed by one declaration to its parent module.
    ModuleChild {
        /// Type context the methods were declared on.
        origin: ContextId,
        methods: Vec<&'d MethodDecl>,
    },
}

#[derive(Debug)]
pub struct TypeContext<'d> {
    kind: ContextKind<'d>,
    parent: Option<ContextId>,
    children: Vec<ContextId>,
    conversions: Vec<Conversion>,
}

impl<'d> TypeContext<'d> {
    pub fn kind(&self) -> &ContextKind<'d> {
        &self.kind
    }

    pub fn parent(&self) -> Option<ContextId> {
        self.parent
    }

    pub fn children(&self) -> &[ContextId] {
        &self.children
    }

    /// Outputs this context produces, in the order the target listed them.
    pub fn conversions(&self) -> &[Conversion] {
        &self.conversions
    }

    /// The declaration behind a type context.
    pub fn decl(&self) -> Option<&'d DeclaredType> {
        match self.kind {
            ContextKind::Type { decl, .. } => Some(decl),
            _ => None,
        }
    }

    pub fn mapped_namespace(&self) -> Option<&str> {
        match &self.kind {
            ContextKind::Type {
                mapped_namespace, ..
            } => mapped_namespace.as_deref(),
            _ => None,
        }
    }
}

/// Forest of contexts plus the ordered list of roots.
#[derive(Debug, Default)]
pub struct ContextTree<'d> {
    contexts: Vec<TypeContext<'d>>,
    roots: Vec<ContextId>,
}

impl<'d> ContextTree<'d> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a detached context. Attach it with [`add_root`](Self::add_root)
    /// or [`add_child`](Self::add_child).
    pub fn insert(&mut self, kind: ContextKind<'d>) -> ContextId {
        let id = u32::try_from(self.contexts.len())
            .unwrap_or_else(|_| panic!("context count exceeds u32::MAX"));
        self.contexts.push(TypeContext {
            kind,
            parent: None,
            children: Vec::new(),
            conversions: Vec::new(),
        });
        ContextId::new(id)
    }

    /// Register `id` as a root of the forest.
    pub fn add_root(&mut self, id: ContextId) -> Result<(), ConfigError> {
        self.check_issued(id)?;
        if let Some(parent) = self.contexts[id.index()].parent {
            return Err(ConfigError::AlreadyParented {
                context: self.label(id),
                parent: self.label(parent),
            });
        }
        if self.roots.contains(&id) {
            return Err(ConfigError::AlreadyRegistered {
                context: self.label(id),
            });
        }

        self.roots.push(id);
        Ok(())
    }

    /// Attach `child` under `parent`. The parent link can be set only once.
    pub fn add_child(&mut self, parent: ContextId, child: ContextId) -> Result<(), ConfigError> {
        self.check_issued(parent)?;
        self.check_issued(child)?;
        if parent == child || self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(ConfigError::SelfParent {
                context: self.label(child),
            });
        }
        if let Some(existing) = self.contexts[child.index()].parent {
            return Err(ConfigError::AlreadyParented {
                context: self.label(child),
                parent: self.label(existing),
            });
        }
        if self.roots.contains(&child) {
            return Err(ConfigError::AlreadyRegistered {
                context: self.label(child),
            });
        }

        self.contexts[child.index()].parent = Some(parent);
        self.contexts[parent.index()].children.push(child);
        Ok(())
    }

    /// Ids from another tree may point past this arena.
    fn check_issued(&self, id: ContextId) -> Result<(), ConfigError> {
        if id.index() < self.contexts.len() {
            Ok(())
        } else {
            Err(ConfigError::UnknownContext { context: id.raw() })
        }
    }

    pub fn get(&self, id: ContextId) -> &TypeContext<'d> {
        &self.contexts[id.index()]
    }

    pub fn roots(&self) -> &[ContextId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Display name. Module children defer to their parent module.
    pub fn name(&self, id: ContextId) -> &str {
        let context = self.get(id);
        match &context.kind {
            ContextKind::Type { decl, .. } => &decl.identifier,
            ContextKind::ModuleParent { name } => name,
            ContextKind::ModuleChild { .. } => context.parent.map_or("", |parent| self.name(parent)),
        }
    }

    /// Strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: ContextId) -> impl Iterator<Item = ContextId> + '_ {
        std::iter::successors(self.get(id).parent, |current| self.get(*current).parent)
    }

    /// All attached contexts, roots in registration order, each followed by
    /// its subtree.
    pub fn pre_order(&self) -> Vec<ContextId> {
        let mut order = Vec::with_capacity(self.contexts.len());
        let mut stack: Vec<ContextId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.get(id).children.iter().rev().copied());
        }
        order
    }

    pub(crate) fn set_conversions(&mut self, id: ContextId, conversions: Vec<Conversion>) {
        self.contexts[id.index()].conversions = conversions;
    }

    /// Name used in error messages: qualified for types.
    fn label(&self, id: ContextId) -> String {
        match &self.get(id).kind {
            ContextKind::Type { decl, .. } => decl.qualified_name(),
            ContextKind::ModuleParent { name } => format!("module {name}"),
            ContextKind::ModuleChild { .. } => format!("module {}", self.name(id)),
        }
    }
}

#[cfg(test)]
mod tests;
