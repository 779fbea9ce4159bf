//! Property tests: builders never touch their input, rules only ever append,
//! and resolvable extensions stay unique.

use loadout::{OptimizationOptions, WebpackConfig, build_rule, build_split_chunks};
use proptest::prelude::*;
use std::collections::HashSet;

fn transformer() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("css".to_string()),
        Just("less".to_string()),
        Just("sass".to_string()),
        Just("stylus".to_string()),
        Just("babel".to_string()),
        Just("jsx".to_string()),
        Just("ts".to_string()),
        Just("tsx".to_string()),
        Just("flow".to_string()),
        Just("file".to_string()),
        "[a-z]{1,8}(-loader)?",
    ]
}

fn extension() -> impl Strategy<Value = String> {
    prop_oneof![Just("js".to_string()), "[a-z]{1,4}"]
}

proptest! {
    #[test]
    fn builders_leave_input_untouched(
        calls in prop::collection::vec((extension(), transformer()), 1..12),
        extract_common in any::<bool>(),
        vendor in prop::option::of("[a-z]{1,6}"),
    ) {
        let mut config = WebpackConfig::default();
        for (ext, kind) in &calls {
            let snapshot = config.clone();
            let next = build_rule(&config, ext, kind.as_str()).unwrap();
            prop_assert_eq!(&config, &snapshot);

            // append-only: the previous rules are a prefix of the new ones
            prop_assert_eq!(next.module.rules.len(), config.module.rules.len() + 1);
            prop_assert_eq!(&next.module.rules[..config.module.rules.len()], &config.module.rules[..]);
            prop_assert!(!next.module.rules.last().unwrap().loaders().is_empty());

            config = next;
        }

        let snapshot = config.clone();
        let options = OptimizationOptions { extract_common, extract_vendor: vendor };
        let _ = build_split_chunks(&config, &options);
        prop_assert_eq!(config, snapshot);
    }

    #[test]
    fn resolve_extensions_stay_unique(
        calls in prop::collection::vec((extension(), transformer()), 1..16),
    ) {
        let mut config = WebpackConfig::default();
        for (ext, kind) in &calls {
            config = build_rule(&config, ext, kind.as_str()).unwrap();
        }

        let unique: HashSet<_> = config.resolve.extensions.iter().collect();
        prop_assert_eq!(unique.len(), config.resolve.extensions.len());
        prop_assert!(config.resolve.extensions.iter().all(|e| e.starts_with('.')));
    }

    #[test]
    fn only_js_rules_exclude_dependencies(ext in extension(), kind in transformer()) {
        let config = build_rule(&WebpackConfig::default(), &ext, kind.as_str()).unwrap();
        let rule = config.module.rules[0].as_rule().unwrap();
        prop_assert_eq!(rule.exclude.is_some(), ext == "js");
        prop_assert!(rule.steps.iter().all(|s| s.loader.ends_with("-loader")));
    }
}
