//! Codebind Conversion Driver
//!
//! Ties the pipeline together for one target:
//!
//! 1. Validate the declaration forest's binding attributes.
//! 2. Build the [`CompilationAggregate`](cb_context::CompilationAggregate)
//!    in a single pass.
//! 3. Render every conversion with `rayon`, one emitter per artifact, and
//!    return the results in manifest order.
//!
//! The driver never touches the file system; [`GeneratorOptions`] only
//! computes where each artifact belongs.

mod convert;
mod error;
mod options;

use std::sync::Once;

pub use convert::{convert, ConversionResult, Converter};
pub use error::{ArtifactError, ConvertError};
pub use options::{ConverterOptions, GeneratorOptions};

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber driven by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. With `CB_LOG_TREE` also set, spans
/// are rendered as an indented tree instead of flat lines. Safe to call more
/// than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        if std::env::var("CB_LOG_TREE").is_ok() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
