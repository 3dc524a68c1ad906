//! Scoped Text Emitter
//!
//! Every target writer produces its files through a [`CodeEmitter`]: an
//! indentation-tracked text sink with disposable scopes and inline child
//! emitters.
//!
//! # Model
//!
//! ```text
//! CodeEmitter (root) ──┬── Scope guards (LIFO, restore indent on drop)
//!                      └── at most one child CodeEmitter (shares the sink)
//! ```
//!
//! Indentation is written lazily, only when the first text of a physical
//! line arrives. Lines that begin with a newline are never indented, so
//! blank lines carry no trailing whitespace.
//!
//! Emitters are single-threaded (`!Send`): each output artifact owns its own
//! instance.

mod emitter;
mod error;

pub use emitter::{CodeEmitter, CodeWriter, EmitterConfig, Scope, DEFAULT_INDENT_WIDTH};
pub use error::EmitError;
