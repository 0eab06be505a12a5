//! Project configuration
//!
//! Read from `.gemclean.toml` (or `.gemclean.json`) in the project root when
//! present; every field has a default matching a plain Bundler project.

use crate::Result;
use crate::engine::InstallOptions;
use gemclean_fs::ConfigStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file names, in lookup order
pub const CONFIG_FILES: [&str; 2] = [".gemclean.toml", ".gemclean.json"];

fn default_manifest() -> PathBuf {
    PathBuf::from("Gemfile")
}

fn default_install_command() -> Vec<String> {
    vec!["bundle".to_string(), "install".to_string()]
}

/// Lock file Bundler pairs with a manifest: `gems.rb` locks to
/// `gems.locked`, anything else to `<manifest>.lock`.
pub fn default_lock_path(manifest: &Path) -> PathBuf {
    if manifest.file_name().is_some_and(|name| name == "gems.rb") {
        manifest.with_file_name("gems.locked")
    } else {
        let mut name = manifest.as_os_str().to_os_string();
        name.push(".lock");
        PathBuf::from(name)
    }
}

/// Where the bundle lives and how to install it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReleaseConfig {
    /// Project root; set by [`ReleaseConfig::load`], never read from the file
    #[serde(skip)]
    pub root: PathBuf,

    /// Manifest path relative to the root
    pub manifest: PathBuf,

    /// Lock file path relative to the root; derived from the manifest if unset
    pub lockfile: Option<PathBuf>,

    /// Program and arguments that install a bundle
    pub install_command: Vec<String>,

    /// Extra arguments appended to the install command
    pub install_args: Vec<String>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            manifest: default_manifest(),
            lockfile: None,
            install_command: default_install_command(),
            install_args: Vec::new(),
        }
    }
}

impl ReleaseConfig {
    /// Defaults rooted at `root`, ignoring any config file.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Load the project config from `root`, falling back to defaults.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let store = ConfigStore::new();

        for name in CONFIG_FILES {
            let path = root.join(name);
            if let Some(mut config) = store.load_optional::<ReleaseConfig>(&path)? {
                tracing::debug!(path = %path.display(), "Loaded config");
                config.root = root;
                return Ok(config);
            }
        }

        Ok(Self::for_root(root))
    }

    pub fn with_manifest(mut self, manifest: impl Into<PathBuf>) -> Self {
        self.manifest = manifest.into();
        self
    }

    pub fn with_lockfile(mut self, lockfile: impl Into<PathBuf>) -> Self {
        self.lockfile = Some(lockfile.into());
        self
    }

    pub fn with_install_command<I, S>(mut self, command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.install_command = command.into_iter().map(Into::into).collect();
        self
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest)
    }

    pub fn lock_path(&self) -> PathBuf {
        match &self.lockfile {
            Some(lockfile) => self.root.join(lockfile),
            None => default_lock_path(&self.manifest_path()),
        }
    }

    pub fn install_options(&self) -> InstallOptions {
        InstallOptions {
            extra_args: self.install_args.clone(),
        }
    }
}
