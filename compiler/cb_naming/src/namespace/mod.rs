//! Namespace mapping trie.
//!
//! Each node is one dotted segment. A mapping is recorded on the node
//! reached by pushing the full source path; lookups descend segment by
//! segment and report the mapping of the deepest node reached together
//! with the unconsumed suffix.

use rustc_hash::FxHashMap;

/// How the leftover suffix is folded into a mapped namespace.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NamespaceNormalization {
    #[default]
    None,
    LowerCase,
}

#[derive(Clone, Debug, Default)]
struct Node {
    children: FxHashMap<String, Node>,
    mapped: Option<String>,
}

/// Prefix trie mapping dotted source namespaces to target namespaces.
///
/// Built once before traversal, read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct NamespaceMappingTree {
    root: Node,
}

impl NamespaceMappingTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `source` (and, through leftovers, everything below it) to `target`.
    ///
    /// Pushing the same source path again overwrites the mapping.
    pub fn push_mapping(&mut self, source: &str, target: impl Into<String>) {
        let mut node = &mut self.root;
        for segment in source.split('.') {
            node = node.children.entry(segment.to_string()).or_default();
        }
        node.mapped = Some(target.into());
    }

    /// Resolve `source` into `(mapped, leftover)`.
    ///
    /// Segments match whole or not at all. With no matching segment, or when
    /// the deepest matched node carries no mapping, the whole path is the
    /// leftover.
    pub fn resolve(&self, source: &str) -> (Option<&str>, Option<String>) {
        let segments: Vec<&str> = source.split('.').collect();
        let mut node = &self.root;
        let mut matched = 0;
        for segment in &segments {
            match node.children.get(*segment) {
                Some(child) => {
                    node = child;
                    matched += 1;
                }
                None => break,
            }
        }

        if matched == 0 {
            return (None, Some(source.to_string()));
        }

        match node.mapped.as_deref() {
            Some(mapped) => {
                let leftover = if matched == segments.len() {
                    None
                } else {
                    Some(segments[matched..].join("."))
                };
                (Some(mapped), leftover)
            }
            None => (None, Some(source.to_string())),
        }
    }

    /// Mapped namespace with the leftover appended as `mapped.leftover`.
    ///
    /// Returns `None` when no mapping applies to `source`.
    pub fn get_mapped_namespace(
        &self,
        source: &str,
        normalization: NamespaceNormalization,
    ) -> Option<String> {
        let (mapped, leftover) = self.resolve(source);
        let mapped = mapped?;
        Some(match leftover {
            None => mapped.to_string(),
            Some(leftover) => match normalization {
                NamespaceNormalization::None => format!("{mapped}.{leftover}"),
                NamespaceNormalization::LowerCase => {
                    format!("{mapped}.{}", leftover.to_lowercase())
                }
            },
        })
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}
