use gemclean_manifest::{
    Dependency, DependencyOptions, DependencySet, RECOGNIZED_OPTIONS, SourceDescriptor, SourceRef,
    filter_options, render_manifest, strip_sources,
};
use proptest::prelude::*;
use serde_json::Value;

fn option_key() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(RECOGNIZED_OPTIONS.to_vec()).prop_map(str::to_string),
        "[a-z_]{1,12}",
    ]
}

fn options() -> impl Strategy<Value = DependencyOptions> {
    proptest::collection::btree_map(option_key(), "[ -~]{0,8}".prop_map(Value::String), 0..10)
}

fn source() -> impl Strategy<Value = Option<SourceRef>> {
    prop_oneof![
        Just(None),
        Just(Some(SourceRef::DefaultRegistry)),
        "[a-z./]{1,10}".prop_map(|path| Some(SourceRef::Other(SourceDescriptor::Path { path }))),
        "[a-z:/.]{1,10}".prop_map(|uri| Some(SourceRef::Other(SourceDescriptor::Git {
            uri,
            reference: None
        }))),
        "[a-z:/.]{1,10}".prop_map(|uri| Some(SourceRef::Other(SourceDescriptor::Registry { uri }))),
    ]
}

fn dependency_set() -> impl Strategy<Value = DependencySet> {
    proptest::collection::vec(("[a-z][a-z0-9_-]{0,10}", options(), source()), 0..12).prop_map(
        |entries| {
            entries
                .into_iter()
                .map(|(name, options, source)| Dependency {
                    name,
                    requirements: vec![">= 0".into()],
                    options,
                    source,
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn filter_keeps_exactly_whitelisted_keys(options in options()) {
        let filtered = filter_options(&options);

        for (key, value) in &options {
            if RECOGNIZED_OPTIONS.contains(&key.as_str()) {
                prop_assert_eq!(filtered.get(key), Some(value));
            } else {
                prop_assert!(!filtered.contains_key(key));
            }
        }
        prop_assert!(filtered.keys().all(|k| options.contains_key(k)));
    }

    #[test]
    fn strip_leaves_no_other_source(mut set in dependency_set()) {
        strip_sources(&mut set);
        prop_assert!(set
            .dependencies
            .iter()
            .all(|d| matches!(d.source, None | Some(SourceRef::DefaultRegistry))));
    }

    #[test]
    fn strip_is_idempotent(mut set in dependency_set()) {
        strip_sources(&mut set);
        let once = set.clone();
        strip_sources(&mut set);
        prop_assert_eq!(set, once);
    }

    #[test]
    fn render_preserves_order(set in dependency_set()) {
        let rendered = render_manifest(&set);
        let names: Vec<&str> = rendered
            .lines()
            .filter_map(|l| l.strip_prefix("gem \""))
            .map(|l| l.split('"').next().unwrap_or_default())
            .collect();
        prop_assert_eq!(names, set.names());
    }
}
