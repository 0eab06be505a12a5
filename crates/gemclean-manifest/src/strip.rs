//! Removal of non-registry source overrides

use crate::model::{DependencySet, SourceRef};

/// Clear every source that is not the default registry.
///
/// Returns the names of the dependencies whose source was cleared, in
/// declaration order. Applying it twice is the same as applying it once.
pub fn strip_sources(set: &mut DependencySet) -> Vec<String> {
    let mut stripped = Vec::new();

    for dependency in &mut set.dependencies {
        if let Some(SourceRef::Other(descriptor)) = &dependency.source {
            tracing::debug!(dependency = %dependency.name, source = %descriptor, "Stripping source");
            dependency.source = None;
            stripped.push(dependency.name.clone());
        }
    }

    stripped
}
