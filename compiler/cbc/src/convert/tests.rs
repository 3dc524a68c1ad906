use std::path::PathBuf;

use cb_clang::CLangTarget;
use cb_ir::{Attribute, DeclaredType, MethodDecl, Signature, TypeRef};
use cb_naming::NamespaceNormalization;
use pretty_assertions::assert_eq;

use super::*;
use crate::options::GeneratorOptions;

fn forest() -> DeclForest {
    DeclForest::new("sample")
        .with_type(
            DeclaredType::enumeration("PageKind", "SampleLibrary.Core")
                .with_attribute(Attribute::ExplicitBinding("SLPageKind".into()))
                .with_attribute(Attribute::Stem("PAGE_KIND".into()))
                .with_enum_member("Landscape", 0)
                .with_enum_member("Portrait", 1),
        )
        .with_type(
            DeclaredType::class("Document", "SampleLibrary.Core")
                .with_attribute(Attribute::ModuleName("Document".into()))
                .with_method(MethodDecl::native("SLDocument_Create")),
        )
}

#[test]
fn invalid_forest_is_rejected_before_construction() {
    let forest = DeclForest::new("sample").with_type(
        DeclaredType::class("Document", "Lib").with_attribute(Attribute::Stem("DOC".into())),
    );

    let err = convert(&forest, &CLangTarget, ConverterOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::Validation(ref report) if report.len() == 1));
    assert!(err.to_string().starts_with("1 validation errors:\n"));

    let result = convert(
        &forest,
        &CLangTarget,
        ConverterOptions::default().ignoring_validation_errors(),
    )
    .unwrap();
    assert!(result.is_success());
}

#[test]
fn repeated_runs_are_identical() {
    let forest = forest();
    let converter = Converter::new(&CLangTarget);
    let first = converter.convert(&forest).unwrap();
    let second = converter.convert(&forest).unwrap();
    assert_eq!(first, second);
    assert!(first.is_success());
}

#[test]
fn outputs_follow_manifest_order() {
    let forest = forest();
    let result = convert(&forest, &CLangTarget, ConverterOptions::default()).unwrap();
    let paths: Vec<_> = result
        .outputs
        .iter()
        .map(|output| output.relative_path.as_str())
        .collect();
    assert_eq!(
        paths,
        ["Document.h", "sample.h", "libdefs.h", "Types.h", "CBBaseTypes.h"]
    );
}

#[test]
fn byte_order_mark_defaults_to_target_and_can_be_overridden() {
    let forest = forest();
    let with_bom = convert(&forest, &CLangTarget, ConverterOptions::default()).unwrap();
    assert!(with_bom.outputs.iter().all(|output| output.byte_order_mark));

    let without = convert(
        &forest,
        &CLangTarget,
        ConverterOptions::default().with_byte_order_mark(false),
    )
    .unwrap();
    let types = without.output("Types.h").unwrap();
    assert!(!types.byte_order_mark);
    assert_eq!(types.to_bytes(), types.content.as_bytes());
}

#[test]
fn indent_width_reaches_emitters() {
    let forest = forest();
    let result = convert(
        &forest,
        &CLangTarget,
        ConverterOptions::default().with_indent_width(2),
    )
    .unwrap();
    let types = &result.output("Types.h").unwrap().content;
    assert!(types.contains("\n  PAGE_KIND_LANDSCAPE = 0,\n"));
}

#[test]
fn failed_artifact_does_not_stop_others() {
    let forest = DeclForest::new("sample").with_type(
        DeclaredType::class("Broken", "Lib")
            .with_attribute(Attribute::ModuleName("Broken".into()))
            .with_method(
                MethodDecl::native("Broken_Get")
                    .with_signature(Signature::new(TypeRef::predefined("decimal"), Vec::new())),
            ),
    );

    let result = convert(&forest, &CLangTarget, ConverterOptions::default()).unwrap();
    assert!(!result.is_success());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].relative_path, "Broken.h");
    assert_eq!(
        result.errors[0].to_string(),
        "Broken.h: unsupported predefined type `decimal`"
    );
    assert_eq!(result.outputs.len(), 4);
    assert!(result.output("Broken.h").is_none());
}

#[test]
fn namespace_options_reach_the_aggregate() {
    let forest = forest();
    let converter = Converter::with_options(
        &CLangTarget,
        ConverterOptions::default()
            .with_namespace_mapping("SampleLibrary", "com.sample")
            .with_normalization(NamespaceNormalization::LowerCase),
    );
    let aggregate = converter.collect(&forest).unwrap();
    let first = aggregate.context(aggregate.tree().roots()[0]);
    assert_eq!(first.mapped_namespace(), Some("com.sample.core"));
    assert_eq!(aggregate.namespaces(), ["SampleLibrary.Core"]);
}

#[test]
fn output_paths_are_rooted() {
    let forest = forest();
    let result = convert(&forest, &CLangTarget, ConverterOptions::default()).unwrap();
    let generator = GeneratorOptions::new("/tmp/bindings");
    assert_eq!(
        generator.output_path(result.output("Types.h").unwrap()),
        PathBuf::from("/tmp/bindings/Types.h")
    );
}
