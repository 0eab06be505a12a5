//! Error types for gemclean-core

use std::path::PathBuf;
use std::process::ExitStatus;

/// Result type for gemclean-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the bundle engine and transaction preparation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Manifest text could not be parsed
    #[error("Failed to parse manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: gemclean_manifest::ManifestError,
    },

    /// No install command configured
    #[error("Install command is empty")]
    EmptyInstallCommand,

    /// The install command could not be started
    #[error("Failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The install command ran and failed
    #[error("`{command}` exited with {status}")]
    InstallFailed { command: String, status: ExitStatus },

    /// Resolution or installation failure reported by a custom engine
    #[error("Bundle engine error: {message}")]
    Engine { message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from gemclean-fs
    #[error(transparent)]
    Fs(#[from] gemclean_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine {
            message: message.into(),
        }
    }
}

/// Failure of a released-bundle transaction.
///
/// `E` is the error type of the caller-supplied operation, returned as-is in
/// [`TransactionError::Operation`].
#[derive(Debug, thiserror::Error)]
pub enum TransactionError<E> {
    /// The original files could not be read; nothing was modified
    #[error("Failed to snapshot bundle files: {0}")]
    Snapshot(#[source] gemclean_fs::Error),

    /// Preparing the released manifest failed; the files were restored
    #[error("Failed to prepare released bundle: {0}")]
    Collaborator(#[source] Error),

    /// The operation failed; the files were restored
    #[error(transparent)]
    Operation(E),

    /// Writing the original files back failed. The working tree no longer
    /// matches the snapshot. `suppressed` carries the message of an earlier
    /// failure this one took precedence over.
    #[error("Failed to restore bundle files: {source}")]
    Restore {
        #[source]
        source: gemclean_fs::Error,
        suppressed: Option<String>,
    },
}

impl<E> TransactionError<E> {
    /// The operation's own error, if that is what failed.
    pub fn into_operation(self) -> Option<E> {
        match self {
            Self::Operation(e) => Some(e),
            _ => None,
        }
    }

    /// Whether the files on disk may differ from the snapshot.
    pub fn is_restore_failure(&self) -> bool {
        matches!(self, Self::Restore { .. })
    }
}
