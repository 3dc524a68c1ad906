//! Property-based tests for name resolution.
//!
//! 1. Camel-case tokens partition the identifier.
//! 2. Enum constants carry the stem and never collide with the sentinel.
//! 3. The namespace trie never invents a mapping.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use cb_ir::{Attribute, DeclaredType};
use cb_naming::{enum_binding, split_camel_case, NamespaceMappingTree};
use proptest::prelude::*;

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,20}").expect("valid regex")
}

fn namespace_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::string::string_regex("[A-Z][a-z]{0,6}").expect("valid regex"),
        1..5,
    )
    .prop_map(|segments| segments.join("."))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_tokens_partition_identifier(ident in identifier_strategy()) {
        let tokens = split_camel_case(&ident);
        prop_assert!(tokens.iter().all(|token| !token.is_empty()));
        prop_assert_eq!(tokens.concat(), ident.as_str());
    }

    #[test]
    fn prop_enum_constants_carry_stem(
        members in prop::collection::btree_set(identifier_strategy(), 0..8)
    ) {
        let mut decl = DeclaredType::enumeration("Generated", "Lib")
            .with_attribute(Attribute::Stem("GEN".into()));
        for (value, name) in (0_i64..).zip(&members) {
            decl = decl.with_enum_member(name.clone(), value);
        }

        let binding = enum_binding(&decl).unwrap();
        prop_assert_eq!(binding.constants.len(), members.len());
        prop_assert!(binding.constants.iter().all(|c| c.name.starts_with("GEN_")));
        prop_assert_eq!(binding.sentinel.name.as_str(), "__GEN__");
    }

    #[test]
    fn prop_empty_trie_maps_nothing(source in namespace_strategy()) {
        let tree = NamespaceMappingTree::new();
        prop_assert_eq!(tree.resolve(&source), (None, Some(source.clone())));
    }

    #[test]
    fn prop_mapped_prefix_resolves(
        prefix in namespace_strategy(),
        suffix in namespace_strategy(),
    ) {
        let mut tree = NamespaceMappingTree::new();
        tree.push_mapping(&prefix, "target");
        let source = format!("{prefix}.{suffix}");
        prop_assert_eq!(tree.resolve(&source), (Some("target"), Some(suffix)));
    }
}
