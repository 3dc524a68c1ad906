//! Codebind Context Tree
//!
//! Construction half of the binding generator. The decorated declaration
//! forest is walked once by [`Collector`], producing a [`CompilationAggregate`]:
//!
//! - a [`ContextTree`] mirroring the declarations, one context per
//!   non-ignored type, nested types under their enclosing type;
//! - a [`ModuleRegistry`] grouping native methods by module name;
//! - catalogues of bound enums, callbacks, opaque and struct types;
//! - the output manifest: [`Conversion`]s per context plus defaults.
//!
//! Once collected the aggregate is read-only. Writers render conversions
//! against it, each with its own emitter, possibly on several threads.

mod aggregate;
mod collect;
mod conversion;
mod error;
mod module;
mod tree;

pub use aggregate::CompilationAggregate;
pub use collect::Collector;
pub use conversion::{ContentGenerator, Conversion, RenderedOutput, Target, BYTE_ORDER_MARK};
pub use error::{ConfigError, GenerateError};
pub use module::{module_methods, ModuleRegistry};
pub use tree::{ContextId, ContextKind, ContextTree, TypeContext};
