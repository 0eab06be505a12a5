//! Rendering of a dependency set into released-form Gemfile text
//!
//! Output shape:
//!
//! ```text
//! ruby "3.2.2"
//!
//! gem "rails", ">= 7.0", "< 8.0"
//! gem "rspec", ">= 0", "group" => "test"
//! ```
//!
//! Only whitelisted options are emitted (see [`crate::options`]); sources are
//! never emitted. Declarations keep their input order.

use crate::model::{Dependency, DependencySet};
use crate::options::filter_options;
use serde_json::Value;

/// Render `set` as manifest text.
pub fn render_manifest(set: &DependencySet) -> String {
    let mut out = String::new();

    if let Some(version) = &set.runtime_version {
        out.push_str("ruby ");
        out.push_str(&ruby_string(version));
        out.push_str("\n\n");
    }

    for dependency in &set.dependencies {
        out.push_str(&render_dependency(dependency));
        out.push('\n');
    }

    out
}

/// Render `set` for an installer: [`render_manifest`] preceded by a `source`
/// line naming the set's registry.
pub fn render_install_manifest(set: &DependencySet) -> String {
    format!(
        "source {}\n\n{}",
        ruby_string(set.registry_url()),
        render_manifest(set)
    )
}

/// Render one `gem` declaration without the trailing newline.
pub fn render_dependency(dependency: &Dependency) -> String {
    let mut parts = vec![ruby_string(&dependency.name)];
    parts.extend(dependency.requirements_list().into_iter().map(ruby_string));

    for (key, value) in filter_options(&dependency.options) {
        parts.push(format!("{} => {}", ruby_string(&key), ruby_literal(&value)));
    }

    format!("gem {}", parts.join(", "))
}

/// Render a JSON value as the equivalent Ruby literal.
pub fn ruby_literal(value: &Value) -> String {
    match value {
        Value::Null => "nil".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => ruby_string(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(ruby_literal).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{} => {}", ruby_string(k), ruby_literal(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

/// Double-quoted Ruby string with interpolation disabled.
fn ruby_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '#' if matches!(chars.peek(), Some('{' | '$' | '@')) => out.push_str("\\#"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}
