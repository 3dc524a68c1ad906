//! Driver errors.

use cb_context::{ConfigError, GenerateError};
use cb_ir::ValidationReport;

/// Failure that prevents a conversion run from producing anything.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Validation(#[from] ValidationReport),

    #[error("invalid context tree: {0}")]
    Config(#[from] ConfigError),
}

/// A single artifact that failed to render.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{relative_path}: {error}")]
pub struct ArtifactError {
    pub relative_path: String,
    #[source]
    pub error: GenerateError,
}
