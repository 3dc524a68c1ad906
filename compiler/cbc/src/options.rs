//! Conversion and generation options.

use std::path::{Path, PathBuf};

use cb_context::RenderedOutput;
use cb_emit::{EmitterConfig, DEFAULT_INDENT_WIDTH};
use cb_naming::NamespaceNormalization;

/// Options for one conversion run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConverterOptions {
    /// `(source, target)` namespace prefixes, pushed into the mapping trie
    /// before traversal.
    pub namespace_mappings: Vec<(String, String)>,
    /// How unmapped namespace suffixes are folded.
    pub namespace_normalization: NamespaceNormalization,
    /// Spaces per indentation level in generated files.
    pub indent_width: usize,
    /// Overrides the target's byte-order-mark default.
    pub use_byte_order_mark: Option<bool>,
    /// Construct even when validation reports errors.
    pub ignore_validation_errors: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            namespace_mappings: Vec::new(),
            namespace_normalization: NamespaceNormalization::None,
            indent_width: DEFAULT_INDENT_WIDTH,
            use_byte_order_mark: None,
            ignore_validation_errors: false,
        }
    }
}

impl ConverterOptions {
    #[must_use]
    pub fn with_namespace_mapping(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.namespace_mappings.push((source.into(), target.into()));
        self
    }

    #[must_use]
    pub fn with_normalization(mut self, normalization: NamespaceNormalization) -> Self {
        self.namespace_normalization = normalization;
        self
    }

    #[must_use]
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    #[must_use]
    pub fn with_byte_order_mark(mut self, use_byte_order_mark: bool) -> Self {
        self.use_byte_order_mark = Some(use_byte_order_mark);
        self
    }

    #[must_use]
    pub fn ignoring_validation_errors(mut self) -> Self {
        self.ignore_validation_errors = true;
        self
    }

    pub(crate) fn emitter_config(&self) -> EmitterConfig {
        EmitterConfig::with_indent_width(self.indent_width)
    }
}

/// Where rendered artifacts belong on disk.
///
/// Only computes paths; writing files is left to the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub source_root: PathBuf,
}

impl GeneratorOptions {
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// `source_root/relative_path` for `output`.
    pub fn output_path(&self, output: &RenderedOutput) -> PathBuf {
        output
            .relative_path
            .split('/')
            .fold(self.source_root.clone(), |path, segment| path.join(segment))
    }
}
