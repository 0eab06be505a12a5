//! Integration tests for Gemfile parsing

use gemclean_manifest::{ManifestError, SourceDescriptor, SourceRef, parse_manifest};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

const SAMPLE: &str = r#"
source "https://rubygems.org"

ruby "3.2.2"

gem "rails", "~> 7.1", ">= 7.1.2"
gem "pg", require: false
gem "internal_tools", path: "../internal_tools"
gem "foo", ">= 1.0", git: "x", group: "test"

group :development, :test do
  gem "rspec-rails"
  gem "debug", platforms: %i[mri mingw]
end

platforms :jruby do
  gem "activerecord-jdbc-adapter"
end

source "https://gems.example.com" do
  gem "private_gem"
end
"#;

#[test]
fn keeps_global_source_on_the_set() {
    let set = parse_manifest(SAMPLE).unwrap();
    assert_eq!(set.default_registry.as_deref(), Some("https://rubygems.org"));
    assert_eq!(set.registry_url(), "https://rubygems.org");
}

#[test]
fn parses_runtime_version_and_order() {
    let set = parse_manifest(SAMPLE).unwrap();

    assert_eq!(set.runtime_version.as_deref(), Some("3.2.2"));
    assert_eq!(
        set.names(),
        vec![
            "rails",
            "pg",
            "internal_tools",
            "foo",
            "rspec-rails",
            "debug",
            "activerecord-jdbc-adapter",
            "private_gem",
        ]
    );
}

#[test]
fn parses_requirements_in_order() {
    let set = parse_manifest(SAMPLE).unwrap();
    assert_eq!(set.get("rails").unwrap().requirements, vec!["~> 7.1", ">= 7.1.2"]);
    assert!(set.get("pg").unwrap().requirements.is_empty());
}

#[test]
fn parses_sources() {
    let set = parse_manifest(SAMPLE).unwrap();

    assert_eq!(set.get("rails").unwrap().source, None);
    assert_eq!(
        set.get("internal_tools").unwrap().source,
        Some(SourceRef::Other(SourceDescriptor::Path {
            path: "../internal_tools".into()
        }))
    );
    assert_eq!(
        set.get("foo").unwrap().source,
        Some(SourceRef::Other(SourceDescriptor::Git {
            uri: "x".into(),
            reference: None
        }))
    );
    assert_eq!(
        set.get("private_gem").unwrap().source,
        Some(SourceRef::Other(SourceDescriptor::Registry {
            uri: "https://gems.example.com".into()
        }))
    );
}

#[test]
fn block_groups_are_merged_into_options() {
    let set = parse_manifest(SAMPLE).unwrap();

    let rspec = set.get("rspec-rails").unwrap();
    assert_eq!(rspec.options["group"], json!(["development", "test"]));

    let debug = set.get("debug").unwrap();
    assert_eq!(debug.options["group"], json!(["development", "test"]));
    assert_eq!(debug.options["platforms"], json!(["mri", "mingw"]));

    let jdbc = set.get("activerecord-jdbc-adapter").unwrap();
    assert_eq!(jdbc.options["platforms"], json!(["jruby"]));
}

#[test]
fn explicit_options_are_kept_verbatim() {
    let set = parse_manifest(SAMPLE).unwrap();
    let foo = set.get("foo").unwrap();
    assert_eq!(foo.options["group"], json!("test"));
    assert_eq!(foo.options["git"], json!("x"));
    assert_eq!(set.get("pg").unwrap().options["require"], json!(false));
}

#[rstest]
#[case::hash_rocket(r#"gem "foo", "group" => "test""#)]
#[case::symbol_rocket(r#"gem "foo", :group => :test"#)]
#[case::label(r#"gem "foo", group: "test""#)]
#[case::braced(r#"gem "foo", {"group" => "test"}"#)]
#[case::parens(r#"gem("foo", group: :test)"#)]
fn keyword_spellings(#[case] line: &str) {
    let set = parse_manifest(line).unwrap();
    assert_eq!(set.dependencies[0].options["group"], json!("test"));
}

#[test]
fn multi_line_declaration() {
    let content = "gem \"nokogiri\",\n    \">= 1.15\", # html parsing\n    require: false\n";
    let set = parse_manifest(content).unwrap();

    let nokogiri = set.get("nokogiri").unwrap();
    assert_eq!(nokogiri.requirements, vec![">= 1.15"]);
    assert_eq!(nokogiri.options["require"], json!(false));
}

#[test]
fn git_block_with_branch() {
    let content = r#"
git "https://example.com/tools.git", branch: "main" do
  gem "tool_a"
  gem "tool_b", github: "acme/tool_b"
end
"#;
    let set = parse_manifest(content).unwrap();

    assert_eq!(
        set.get("tool_a").unwrap().source,
        Some(SourceRef::Other(SourceDescriptor::Git {
            uri: "https://example.com/tools.git".into(),
            reference: Some("main".into())
        }))
    );
    assert_eq!(
        set.get("tool_b").unwrap().source,
        Some(SourceRef::Other(SourceDescriptor::Git {
            uri: "https://github.com/acme/tool_b.git".into(),
            reference: None
        }))
    );
}

#[test]
fn default_registry_source_option() {
    let content = r#"
source "https://rubygems.org/"
gem "rack", source: "https://rubygems.org"
"#;
    let set = parse_manifest(content).unwrap();
    assert_eq!(set.get("rack").unwrap().source, Some(SourceRef::DefaultRegistry));
}

#[test]
fn gemspec_and_git_source_blocks_are_skipped() {
    let content = r#"
source "https://rubygems.org"
git_source(:github) do |repo_name|
  "https://github.com/#{repo_name}.git"
end
gemspec
gem "rake"
"#;
    let set = parse_manifest(content).unwrap();
    assert_eq!(set.names(), vec!["rake"]);
}

#[test]
fn unsupported_statement_reports_line() {
    let content = "gem \"rake\"\nif ENV[\"CI\"]\n";
    let err = parse_manifest(content).unwrap_err();
    assert_eq!(
        err,
        ManifestError::Unsupported {
            line: 2,
            statement: "if ENV[\"CI\"]".into()
        }
    );
}

#[rstest]
#[case::stray_end("gem \"rake\"\nend\n", 2)]
#[case::unclosed_group("group :test do\n  gem \"rspec\"\n", 1)]
fn unbalanced_blocks(#[case] content: &str, #[case] line: usize) {
    let err = parse_manifest(content).unwrap_err();
    assert_eq!(err, ManifestError::UnbalancedBlock { line });
}

#[rstest]
#[case::missing_name("gem require: false")]
#[case::interpolation(r##"gem "foo", "#{VERSION}""##)]
#[case::global_interpolation(r##"gem "foo", path: "vendor/#$name""##)]
#[case::ivar_interpolation(r##"gem "foo", "#@version""##)]
#[case::positional_after_keyword(r#"gem "foo", require: false, ">= 1""#)]
#[case::dangling_comma("gem \"foo\",")]
fn syntax_errors(#[case] content: &str) {
    let err = parse_manifest(content).unwrap_err();
    assert!(matches!(err, ManifestError::Syntax { .. }), "got {err:?}");
}
