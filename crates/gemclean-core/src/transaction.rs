//! Snapshot/restore transaction around a caller operation
//!
//! ```text
//! Idle -> Snapshotted -> Cleaned -> (operation) -> Restored
//! ```
//!
//! The manifest and lock file are captured before anything is touched and
//! written back exactly once, whether the operation returns, fails, or panics.

use crate::config::ReleaseConfig;
use crate::engine::{BundleEngine, InstallOptions};
use crate::error::{Error, TransactionError};
use gemclean_fs::{FileSnapshot, io};
use gemclean_manifest::{render_manifest, strip_sources};
use std::fmt;
use std::path::PathBuf;

/// Transaction stage, reported in log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Snapshotted,
    Cleaned,
    Restored,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Snapshotted => "snapshotted",
            Self::Cleaned => "cleaned",
            Self::Restored => "restored",
        };
        f.write_str(name)
    }
}

/// Holds the snapshot until it has been restored. Dropping an unrestored
/// guard (an unwinding operation) restores it.
struct RestoreGuard {
    snapshot: Option<FileSnapshot>,
}

impl RestoreGuard {
    fn new(snapshot: FileSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    fn restore(&mut self) -> gemclean_fs::Result<()> {
        match self.snapshot.take() {
            Some(snapshot) => {
                tracing::info!("Restoring bundle");
                snapshot.restore()
            }
            None => Ok(()),
        }
    }
}

impl Drop for RestoreGuard {
    fn drop(&mut self) {
        if self.snapshot.is_some() {
            tracing::warn!("Operation unwound; restoring bundle");
            if let Err(e) = self.restore() {
                tracing::error!("Failed to restore bundle files: {}", e);
            }
        }
    }
}

/// Runs an operation against the released form of a project's bundle.
#[derive(Debug, Clone)]
pub struct ReleaseTransaction {
    root: PathBuf,
    manifest_path: PathBuf,
    lock_path: PathBuf,
    options: InstallOptions,
}

impl ReleaseTransaction {
    pub fn new(config: &ReleaseConfig) -> Self {
        Self {
            root: config.root.clone(),
            manifest_path: config.manifest_path(),
            lock_path: config.lock_path(),
            options: config.install_options(),
        }
    }

    /// Snapshot, clean, run `op`, restore.
    ///
    /// A restore failure takes precedence over any earlier failure; the
    /// earlier message is kept in [`TransactionError::Restore::suppressed`].
    pub fn run<T, E, F>(self, engine: &dyn BundleEngine, op: F) -> Result<T, TransactionError<E>>
    where
        F: FnOnce() -> Result<T, E>,
        E: fmt::Display,
    {
        tracing::debug!(stage = %Stage::Idle, manifest = %self.manifest_path.display());

        let snapshot = FileSnapshot::capture(&self.manifest_path, &self.lock_path)
            .map_err(TransactionError::Snapshot)?;
        let mut guard = RestoreGuard::new(snapshot);
        tracing::debug!(stage = %Stage::Snapshotted);

        let outcome = match self.clean(engine) {
            Ok(()) => {
                tracing::debug!(stage = %Stage::Cleaned);
                op().map_err(TransactionError::Operation)
            }
            Err(e) => Err(TransactionError::Collaborator(e)),
        };

        let restored = guard.restore();
        match (outcome, restored) {
            (outcome, Ok(())) => {
                tracing::debug!(stage = %Stage::Restored);
                outcome
            }
            (Ok(_), Err(source)) => Err(TransactionError::Restore {
                source,
                suppressed: None,
            }),
            (Err(pending), Err(source)) => {
                let suppressed = pending.to_string();
                tracing::error!("Restore failed; suppressing earlier error: {}", suppressed);
                Err(TransactionError::Restore {
                    source,
                    suppressed: Some(suppressed),
                })
            }
        }
    }

    fn clean(&self, engine: &dyn BundleEngine) -> Result<(), Error> {
        tracing::info!("Cleaning bundle");

        // Delete the link target, not the link
        let lock = io::resolve_symlinks(&self.lock_path)?;
        if io::remove_file_if_exists(&lock)? {
            tracing::debug!(lock = %lock.display(), "Removed lock file");
        }

        let mut set = engine.parse_current_manifest()?;
        for name in strip_sources(&mut set) {
            tracing::debug!(dependency = %name, "Stripped source");
        }

        engine.install(&self.root, &set, &self.options)?;
        io::write_text(&self.manifest_path, &render_manifest(&set))?;
        Ok(())
    }
}

/// Run `op` with the project's bundle temporarily in released form.
pub fn in_released_bundle<T, E, F>(
    config: &ReleaseConfig,
    engine: &dyn BundleEngine,
    op: F,
) -> Result<T, TransactionError<E>>
where
    F: FnOnce() -> Result<T, E>,
    E: fmt::Display,
{
    ReleaseTransaction::new(config).run(engine, op)
}
