//! Gemfile model and released-form rendering
//!
//! - [`model`]: dependencies, sources and the ordered dependency set
//! - [`options`]: the fixed option whitelist
//! - [`strip`]: clearing of path, git and alternate-registry sources
//! - [`render`]: released-form manifest text
//! - [`parse`]: reading the declarative Gemfile subset back into the model
//!
//! # Example
//!
//! ```
//! use gemclean_manifest::{parse_manifest, render_manifest, strip_sources};
//!
//! let mut set = parse_manifest(r#"gem "foo", ">= 1.0", git: "x", group: "test""#).unwrap();
//! strip_sources(&mut set);
//!
//! assert_eq!(render_manifest(&set), "gem \"foo\", \">= 1.0\", \"group\" => \"test\"\n");
//! ```

pub mod error;
pub mod model;
pub mod options;
pub mod parse;
pub mod render;
pub mod strip;

pub use error::{ManifestError, Result};
pub use model::{
    DEFAULT_REGISTRY_URL, DEFAULT_REQUIREMENT, Dependency, DependencyOptions, DependencySet,
    SourceDescriptor, SourceRef,
};
pub use options::{RECOGNIZED_OPTIONS, dropped_options, filter_options, is_recognized_option};
pub use parse::parse_manifest;
pub use render::{render_dependency, render_install_manifest, render_manifest};
pub use strip::strip_sources;
