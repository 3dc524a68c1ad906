//! The conversion pipeline.
//!
//! ```text
//! DeclForest
//!     ↓  validate           (skipped with ignore_validation_errors)
//!     ↓  Collector::collect (single pass, builds the aggregate)
//!     ↓  render             (parallel, one emitter per artifact)
//! ConversionResult
//! ```

use cb_context::{Collector, CompilationAggregate, RenderedOutput, Target};
use cb_ir::DeclForest;
use rayon::prelude::*;

use crate::error::{ArtifactError, ConvertError};
use crate::options::ConverterOptions;

/// Rendered artifacts of one run, in manifest order.
///
/// Artifacts that failed are listed in `errors`; the rest are still
/// produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversionResult {
    pub outputs: Vec<RenderedOutput>,
    pub errors: Vec<ArtifactError>,
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// The rendered artifact at `relative_path`.
    pub fn output(&self, relative_path: &str) -> Option<&RenderedOutput> {
        self.outputs
            .iter()
            .find(|output| output.relative_path == relative_path)
    }
}

/// Runs one target over declaration forests.
pub struct Converter<'t> {
    target: &'t dyn Target,
    options: ConverterOptions,
}

impl<'t> Converter<'t> {
    pub fn new(target: &'t dyn Target) -> Self {
        Self::with_options(target, ConverterOptions::default())
    }

    pub fn with_options(target: &'t dyn Target, options: ConverterOptions) -> Self {
        Converter { target, options }
    }

    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Validate, construct and render `forest`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(target = self.target.name(), library = %forest.library_name)
    )]
    pub fn convert(&self, forest: &DeclForest) -> Result<ConversionResult, ConvertError> {
        if let Err(report) = cb_ir::validate(forest) {
            if !self.options.ignore_validation_errors {
                return Err(report.into());
            }
            tracing::warn!(errors = report.len(), "ignoring validation errors");
        }

        let aggregate = self.collect(forest)?;
        Ok(self.render(&aggregate))
    }

    /// Build the aggregate without rendering.
    pub fn collect<'d>(&self, forest: &'d DeclForest) -> Result<CompilationAggregate<'d>, ConvertError> {
        let collector = self
            .options
            .namespace_mappings
            .iter()
            .fold(Collector::new(forest), |collector, (source, target)| {
                collector.with_namespace_mapping(source, target.as_str())
            })
            .with_normalization(self.options.namespace_normalization);
        Ok(collector.collect(self.target)?)
    }

    /// Render every conversion of `aggregate` in parallel.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn render(&self, aggregate: &CompilationAggregate<'_>) -> ConversionResult {
        let config = self.options.emitter_config();
        let default_bom = self
            .options
            .use_byte_order_mark
            .unwrap_or_else(|| self.target.use_byte_order_mark());

        let rendered: Vec<_> = aggregate
            .manifest()
            .into_par_iter()
            .map(|conversion| {
                conversion
                    .render(aggregate, config, default_bom)
                    .map_err(|error| ArtifactError {
                        relative_path: conversion.relative_path(),
                        error,
                    })
            })
            .collect();

        let mut result = ConversionResult::default();
        for artifact in rendered {
            match artifact {
                Ok(output) => result.outputs.push(output),
                Err(error) => {
                    tracing::error!(%error, "artifact failed");
                    result.errors.push(error);
                }
            }
        }
        tracing::debug!(
            outputs = result.outputs.len(),
            errors = result.errors.len(),
            "rendered"
        );
        result
    }
}

/// Convert `forest` for `target` in one call.
pub fn convert(
    forest: &DeclForest,
    target: &dyn Target,
    options: ConverterOptions,
) -> Result<ConversionResult, ConvertError> {
    Converter::with_options(target, options).convert(forest)
}

#[cfg(test)]
mod tests;
