//! Resolution and install collaborator
//!
//! The transaction never resolves dependencies itself. It asks a
//! [`BundleEngine`] for the current dependency set and hands the stripped set
//! back for installation.

use crate::config::{ReleaseConfig, default_lock_path};
use crate::{Error, Result};
use gemclean_fs::io;
use gemclean_manifest::{DependencySet, parse_manifest, render_install_manifest};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Options forwarded to [`BundleEngine::install`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallOptions {
    /// Extra arguments for the install step
    pub extra_args: Vec<String>,
}

/// Parses the on-disk manifest and installs dependency sets.
pub trait BundleEngine {
    /// Build the dependency set from the manifest as it currently is on disk.
    fn parse_current_manifest(&self) -> Result<DependencySet>;

    /// Resolve and install `set`, regenerating the lock file.
    fn install(&self, root: &Path, set: &DependencySet, options: &InstallOptions) -> Result<()>;
}

/// Engine backed by an external install command such as `bundle install`.
///
/// The stripped set is rendered, with a `source` line for its registry, into
/// a hidden file in the project root and the command is pointed at it through
/// `BUNDLE_GEMFILE`; the lock file it writes beside it is copied over the
/// project's lock file and then removed.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    manifest_path: PathBuf,
    lock_path: PathBuf,
    command: Vec<String>,
}

impl CommandEngine {
    pub fn new(manifest_path: impl Into<PathBuf>, lock_path: impl Into<PathBuf>, command: Vec<String>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            lock_path: lock_path.into(),
            command,
        }
    }

    pub fn from_config(config: &ReleaseConfig) -> Self {
        Self::new(
            config.manifest_path(),
            config.lock_path(),
            config.install_command.clone(),
        )
    }

    fn command_line(&self, options: &InstallOptions) -> String {
        self.command
            .iter()
            .chain(&options.extra_args)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the install command against `staged_manifest` and copy the lock
    /// file it produces over the project's.
    fn run_staged(&self, root: &Path, staged_manifest: &Path, options: &InstallOptions) -> Result<()> {
        let (program, args) = self.command.split_first().ok_or(Error::EmptyInstallCommand)?;
        let command_line = self.command_line(options);

        tracing::info!(command = %command_line, "Installing released bundle");
        let status = Command::new(program)
            .args(args)
            .args(&options.extra_args)
            .current_dir(root)
            .env("BUNDLE_GEMFILE", staged_manifest)
            .status()
            .map_err(|source| Error::Spawn {
                command: command_line.clone(),
                source,
            })?;

        if !status.success() {
            return Err(Error::InstallFailed {
                command: command_line,
                status,
            });
        }

        let staged_lock = default_lock_path(staged_manifest);
        if staged_lock.is_file() {
            let lock = io::read_bytes(&staged_lock)?;
            io::write_atomic(&self.lock_path, &lock)?;
            tracing::debug!(lock = %self.lock_path.display(), "Regenerated lock file");
        } else {
            tracing::warn!(
                "Install command did not write {}; lock file not regenerated",
                staged_lock.display()
            );
        }

        Ok(())
    }
}

impl BundleEngine for CommandEngine {
    fn parse_current_manifest(&self) -> Result<DependencySet> {
        let content = io::read_text(&self.manifest_path)?;
        parse_manifest(&content).map_err(|source| Error::Manifest {
            path: self.manifest_path.clone(),
            source,
        })
    }

    fn install(&self, root: &Path, set: &DependencySet, options: &InstallOptions) -> Result<()> {
        if self.command.is_empty() {
            return Err(Error::EmptyInstallCommand);
        }

        // Staged in the project root so relative `path` options resolve
        // the same way they do from the real manifest
        let staged = tempfile::Builder::new()
            .prefix(".gemclean-")
            .suffix(".gemfile")
            .tempfile_in(root)?;
        io::write_text(staged.path(), &render_install_manifest(set))?;

        let result = self.run_staged(root, staged.path(), options);
        io::remove_file_if_exists(&default_lock_path(staged.path()))?;
        result
    }
}
