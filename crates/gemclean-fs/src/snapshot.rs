//! Byte-exact snapshots of the manifest and lock file pair
//!
//! A [`FileSnapshot`] is captured once, never modified, and consumed by
//! [`FileSnapshot::restore`]. Restoration writes the captured bytes back
//! regardless of what happened to the files in between, then re-reads each
//! file and compares checksums.

use crate::checksum::{compute_checksum, compute_file_checksum};
use crate::{Error, Result, io};
use std::path::{Path, PathBuf};

/// The original content of a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedFile {
    path: PathBuf,
    bytes: Vec<u8>,
    checksum: String,
}

impl CapturedFile {
    /// Read a file in full.
    pub fn capture(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let bytes = io::read_bytes(&path)?;
        let checksum = compute_checksum(&bytes);
        tracing::debug!(path = %path.display(), %checksum, "Captured file");
        Ok(Self {
            path,
            bytes,
            checksum,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Overwrite the file with the captured bytes and verify the result.
    fn write_back(&self) -> Result<()> {
        io::write_atomic(&self.path, &self.bytes)?;

        let actual =
            compute_file_checksum(&self.path).map_err(|e| Error::io(&self.path, e))?;
        if actual != self.checksum {
            return Err(Error::ChecksumMismatch {
                path: self.path.clone(),
                expected: self.checksum.clone(),
                actual,
            });
        }
        Ok(())
    }
}

/// Original contents of the manifest and its lock file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSnapshot {
    manifest: CapturedFile,
    lock: CapturedFile,
}

impl FileSnapshot {
    /// Capture both files in full. Nothing on disk is modified.
    pub fn capture(manifest_path: impl Into<PathBuf>, lock_path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            manifest: CapturedFile::capture(manifest_path)?,
            lock: CapturedFile::capture(lock_path)?,
        })
    }

    pub fn manifest(&self) -> &CapturedFile {
        &self.manifest
    }

    pub fn lock(&self) -> &CapturedFile {
        &self.lock
    }

    /// Write both original payloads back.
    ///
    /// Both files are always attempted; when both fail the manifest error is
    /// returned and the lock error is logged.
    pub fn restore(self) -> Result<()> {
        let manifest = self.manifest.write_back();
        let lock = self.lock.write_back();

        match (manifest, lock) {
            (Ok(()), Ok(())) => {
                tracing::debug!(
                    manifest = %self.manifest.path.display(),
                    lock = %self.lock.path.display(),
                    "Restored snapshot"
                );
                Ok(())
            }
            (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
            (Err(manifest_err), Err(lock_err)) => {
                tracing::error!("Failed to restore {}: {}", self.lock.path.display(), lock_err);
                Err(manifest_err)
            }
        }
    }
}
