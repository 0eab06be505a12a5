//! Dependency model shared by the parser, stripper and serializer

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Arbitrary per-dependency metadata, keyed by option name.
pub type DependencyOptions = BTreeMap<String, Value>;

/// Requirement used when a declaration lists no version constraint.
pub const DEFAULT_REQUIREMENT: &str = ">= 0";

/// URL of the standard package index.
pub const DEFAULT_REGISTRY_URL: &str = "https://rubygems.org";

/// Where a dependency is fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceRef {
    /// The standard package index
    DefaultRegistry,
    /// A path, git or alternate-registry reference
    Other(SourceDescriptor),
}

impl SourceRef {
    pub fn is_default_registry(&self) -> bool {
        matches!(self, Self::DefaultRegistry)
    }
}

/// Non-default source locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceDescriptor {
    Path { path: String },
    Git { uri: String, reference: Option<String> },
    Registry { uri: String },
}

impl fmt::Display for SourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path { path } => write!(f, "path {}", path),
            Self::Git {
                uri,
                reference: Some(reference),
            } => write!(f, "git {} ({})", uri, reference),
            Self::Git { uri, reference: None } => write!(f, "git {}", uri),
            Self::Registry { uri } => write!(f, "registry {}", uri),
        }
    }
}

/// A single declared dependency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    /// Requirement expressions in declaration order, e.g. `">= 1.0"`
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub options: DependencyOptions,
    #[serde(default)]
    pub source: Option<SourceRef>,
}

impl Dependency {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirements: Vec::new(),
            options: DependencyOptions::new(),
            source: None,
        }
    }

    pub fn with_requirement(mut self, requirement: impl Into<String>) -> Self {
        self.requirements.push(requirement.into());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_source(mut self, source: SourceRef) -> Self {
        self.source = Some(source);
        self
    }

    /// Requirements as rendered, substituting the implicit `>= 0`.
    pub fn requirements_list(&self) -> Vec<&str> {
        if self.requirements.is_empty() {
            vec![DEFAULT_REQUIREMENT]
        } else {
            self.requirements.iter().map(String::as_str).collect()
        }
    }
}

/// All dependencies of one manifest, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencySet {
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub runtime_version: Option<String>,
    /// Global `source` of the manifest, as declared
    #[serde(default)]
    pub default_registry: Option<String>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_runtime_version(mut self, version: impl Into<String>) -> Self {
        self.runtime_version = Some(version.into());
        self
    }

    pub fn with_default_registry(mut self, uri: impl Into<String>) -> Self {
        self.default_registry = Some(uri.into());
        self
    }

    /// Registry URL an installer should resolve against. Legacy shorthand
    /// sources such as `:rubygems` map to [`DEFAULT_REGISTRY_URL`].
    pub fn registry_url(&self) -> &str {
        match self.default_registry.as_deref() {
            Some(uri) if uri.contains("://") => uri,
            _ => DEFAULT_REGISTRY_URL,
        }
    }

    pub fn push(&mut self, dependency: Dependency) {
        self.dependencies.push(dependency);
    }

    pub fn get(&self, name: &str) -> Option<&Dependency> {
        self.dependencies.iter().find(|d| d.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.dependencies.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

impl FromIterator<Dependency> for DependencySet {
    fn from_iter<I: IntoIterator<Item = Dependency>>(iter: I) -> Self {
        Self {
            dependencies: iter.into_iter().collect(),
            runtime_version: None,
            default_registry: None,
        }
    }
}
