/// Recoverable misuse of the emitter API.
///
/// Unbalanced scope releases are not represented here: they are internal
/// bugs and abort via panic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum EmitError {
    #[error("can't indent with a non positive indent count")]
    NonPositiveIndent,
    #[error("a child emitter is already active")]
    ChildAlreadyActive,
    #[error("the emitter has already been closed")]
    Closed,
}
