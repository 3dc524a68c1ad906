//! Output descriptors and the target interface.
//!
//! A [`Conversion`] names one file a context (or the aggregate) produces and
//! carries the generator that writes it. Targets decide which conversions
//! exist; rendering happens after construction, against the read-only
//! aggregate, with one [`CodeEmitter`] per artifact.

use std::fmt;

use cb_emit::{CodeEmitter, EmitterConfig};

use crate::aggregate::CompilationAggregate;
use crate::error::GenerateError;
use crate::tree::ContextId;

/// UTF-8 byte-order mark.
pub const BYTE_ORDER_MARK: &str = "\u{FEFF}";

/// Writes the content of one artifact.
pub trait ContentGenerator: Send + Sync {
    fn write(
        &self,
        aggregate: &CompilationAggregate<'_>,
        out: &CodeEmitter,
    ) -> Result<(), GenerateError>;

    /// Lines written ahead of the content, such as a "generated file" banner.
    fn generated_preamble(&self) -> Option<&str> {
        None
    }
}

/// One output artifact.
pub struct Conversion {
    file_name: String,
    base_path: Option<String>,
    use_byte_order_mark: Option<bool>,
    generator: Box<dyn ContentGenerator>,
}

impl fmt::Debug for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conversion")
            .field("file_name", &self.file_name)
            .field("base_path", &self.base_path)
            .field("use_byte_order_mark", &self.use_byte_order_mark)
            .finish_non_exhaustive()
    }
}

impl Conversion {
    pub fn new(file_name: impl Into<String>, generator: impl ContentGenerator + 'static) -> Self {
        Conversion {
            file_name: file_name.into(),
            base_path: None,
            use_byte_order_mark: None,
            generator: Box::new(generator),
        }
    }

    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// Override the target's byte-order-mark default for this file.
    #[must_use]
    pub fn with_byte_order_mark(mut self, use_byte_order_mark: bool) -> Self {
        self.use_byte_order_mark = Some(use_byte_order_mark);
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    pub fn use_byte_order_mark(&self) -> Option<bool> {
        self.use_byte_order_mark
    }

    /// `base_path/file_name`, or the file name alone.
    pub fn relative_path(&self) -> String {
        match self.base_path.as_deref() {
            Some(base) if !base.is_empty() => {
                format!("{}/{}", base.trim_end_matches('/'), self.file_name)
            }
            _ => self.file_name.clone(),
        }
    }

    /// Produce the file, preamble first.
    ///
    /// `default_bom` applies when the conversion has no override of its own.
    #[tracing::instrument(level = "debug", skip_all, fields(file = %self.file_name))]
    pub fn render(
        &self,
        aggregate: &CompilationAggregate<'_>,
        config: EmitterConfig,
        default_bom: bool,
    ) -> Result<RenderedOutput, GenerateError> {
        let out = CodeEmitter::with_config(config);
        if let Some(preamble) = self.generator.generated_preamble() {
            out.append_line(preamble);
        }
        self.generator.write(aggregate, &out)?;

        Ok(RenderedOutput {
            relative_path: self.relative_path(),
            content: out.into_output(),
            byte_order_mark: self.use_byte_order_mark.unwrap_or(default_bom),
        })
    }
}

/// Text of one rendered artifact.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RenderedOutput {
    pub relative_path: String,
    pub content: String,
    pub byte_order_mark: bool,
}

impl RenderedOutput {
    /// File bytes, with the UTF-8 BOM when enabled.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.content.len() + BYTE_ORDER_MARK.len());
        if self.byte_order_mark {
            bytes.extend_from_slice(BYTE_ORDER_MARK.as_bytes());
        }
        bytes.extend_from_slice(self.content.as_bytes());
        bytes
    }
}

/// A binding backend: decides which files each context produces.
///
/// Called once per context after construction, so generators may rely on
/// the finished tree (module method lists, catalogues).
pub trait Target: Sync {
    fn name(&self) -> &str;

    /// Whether files get a UTF-8 BOM unless a conversion overrides it.
    fn use_byte_order_mark(&self) -> bool {
        true
    }

    /// Outputs tied to context `id`.
    fn context_conversions(
        &self,
        aggregate: &CompilationAggregate<'_>,
        id: ContextId,
    ) -> Vec<Conversion>;

    /// Outputs not tied to any declaration (shared headers, runtime shims).
    fn default_conversions(&self, aggregate: &CompilationAggregate<'_>) -> Vec<Conversion>;
}
