/// A symbol whose target binding cannot be produced.
///
/// Aborts generation of the artifact that needed the binding, never the
/// whole run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("enum `{enum_name}` has no stem attribute")]
    MissingStem { enum_name: String },

    #[error("enum `{enum_name}` has an invalid substitution pattern `{pattern}`: {message}")]
    InvalidSubstitution {
        enum_name: String,
        pattern: String,
        message: String,
    },

    #[error("unsupported predefined type `{type_name}`")]
    UnsupportedType { type_name: String },
}
