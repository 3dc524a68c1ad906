//! Construction and generation errors.

use cb_emit::EmitError;
use cb_naming::BindingError;

/// Structural misuse of the context tree or module registry.
///
/// Always fatal for the conversion run: no partial tree is exposed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("context `{context}` cannot be its own parent")]
    SelfParent { context: String },

    #[error("context `{context}` already has parent `{parent}`")]
    AlreadyParented { context: String, parent: String },

    #[error("context `{context}` is already registered as a root")]
    AlreadyRegistered { context: String },

    #[error("context #{context} does not belong to this tree")]
    UnknownContext { context: u32 },

    #[error("module `{module}` is already registered")]
    DuplicateModule { module: String },
}

/// Failure while generating a single artifact.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Binding(#[from] BindingError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}
