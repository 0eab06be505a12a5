//! Integration tests for released-form rendering

use gemclean_manifest::{
    Dependency, DependencySet, SourceDescriptor, SourceRef, parse_manifest, render_manifest,
    strip_sources,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn renders_runtime_directive_then_blank_line() {
    let mut set = DependencySet::new().with_runtime_version("3.2.2");
    set.push(Dependency::new("rake"));

    assert_eq!(render_manifest(&set), "ruby \"3.2.2\"\n\ngem \"rake\", \">= 0\"\n");
}

#[test]
fn omits_directive_without_runtime_version() {
    let set: DependencySet = [Dependency::new("rake").with_requirement("~> 13.0")]
        .into_iter()
        .collect();

    assert_eq!(render_manifest(&set), "gem \"rake\", \"~> 13.0\"\n");
}

#[test]
fn preserves_declaration_order() {
    let set: DependencySet = ["zeitwerk", "actionpack", "minitest"]
        .into_iter()
        .map(Dependency::new)
        .collect();

    let rendered = render_manifest(&set);
    let names: Vec<&str> = rendered
        .lines()
        .map(|l| l.split('"').nth(1).unwrap())
        .collect();
    assert_eq!(names, vec!["zeitwerk", "actionpack", "minitest"]);
}

#[test]
fn keeps_duplicate_declarations() {
    let set: DependencySet = [
        Dependency::new("rack").with_requirement(">= 2"),
        Dependency::new("rack").with_requirement("< 4"),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        render_manifest(&set),
        "gem \"rack\", \">= 2\"\ngem \"rack\", \"< 4\"\n"
    );
}

#[test]
fn renders_only_whitelisted_options() {
    let set: DependencySet = [Dependency::new("debug")
        .with_requirement(">= 1.0")
        .with_option("platforms", json!(["mri", "mingw"]))
        .with_option("require", json!("debug/prelude"))
        .with_option("branch", json!("main"))
        .with_option("env", json!({"DEBUG": "1"}))]
    .into_iter()
    .collect();

    assert_eq!(
        render_manifest(&set),
        "gem \"debug\", \">= 1.0\", \"platforms\" => [\"mri\", \"mingw\"], \"require\" => \"debug/prelude\"\n"
    );
}

#[test]
fn foo_scenario_drops_git_and_keeps_group() {
    let mut set = parse_manifest(r#"gem "foo", ">= 1.0", git: "x", group: "test""#).unwrap();
    strip_sources(&mut set);

    let rendered = render_manifest(&set);

    assert_eq!(rendered, "gem \"foo\", \">= 1.0\", \"group\" => \"test\"\n");
    assert!(!rendered.contains("git"));
    assert_eq!(set.dependencies[0].source, None);
}

#[test]
fn round_trip_on_whitelisted_subset() {
    let original = r#"
ruby "3.3.0"
gem "rails", "~> 7.1", ">= 7.1.2"
gem "local_engine", path: "engines/local", require: false, branch: "x"
group :test do
  gem "capybara", git: "https://example.com/capybara.git"
end
gem "quoted", "= 1.0", name: 'we"ird #{x}'
"#;

    let mut set = parse_manifest(original).unwrap();
    strip_sources(&mut set);
    let rendered = render_manifest(&set);
    let reparsed = parse_manifest(&rendered).unwrap();

    assert_eq!(reparsed.runtime_version, set.runtime_version);
    assert_eq!(reparsed.names(), set.names());
    for (before, after) in set.dependencies.iter().zip(&reparsed.dependencies) {
        assert_eq!(after.requirements, before.requirements_list());
        assert_eq!(after.options, gemclean_manifest::filter_options(&before.options));
    }

    // `path` is whitelisted, so the reparsed entry points at the path again
    assert_eq!(
        reparsed.get("local_engine").unwrap().source,
        Some(SourceRef::Other(SourceDescriptor::Path {
            path: "engines/local".into()
        }))
    );
    assert_eq!(reparsed.get("capybara").unwrap().source, None);
}
