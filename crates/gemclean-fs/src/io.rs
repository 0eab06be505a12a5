//! Whole-file I/O with atomic replacement

use crate::{Error, Result};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Symlink chains longer than this are treated as loops
const MAX_SYMLINK_HOPS: usize = 40;

/// Follow symlinks at `path` to the file they name.
///
/// Dangling links resolve to their (missing) target, so writing through the
/// result recreates the target and keeps the link.
pub fn resolve_symlinks(path: &Path) -> Result<PathBuf> {
    let mut target = path.to_path_buf();
    for _ in 0..MAX_SYMLINK_HOPS {
        match fs::symlink_metadata(&target) {
            Ok(metadata) if metadata.file_type().is_symlink() => {
                let link = fs::read_link(&target).map_err(|e| Error::io(&target, e))?;
                target = match target.parent() {
                    Some(parent) => parent.join(link),
                    None => link,
                };
            }
            _ => return Ok(target),
        }
    }
    Err(Error::io(
        path,
        std::io::Error::other("too many levels of symbolic links"),
    ))
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so readers never observe a partial file.
/// A symlinked path is written through to its target; the link survives.
/// Permissions of an existing target are carried over to the replacement.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let resolved = resolve_symlinks(path)?;
    let path = resolved.as_path();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    let written = temp_file
        .write_all(content)
        .and_then(|()| temp_file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&temp_path, e));
    }

    if let Ok(metadata) = fs::metadata(path) {
        temp_file
            .set_permissions(metadata.permissions())
            .map_err(|e| Error::io(&temp_path, e))?;
    }

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;
    drop(temp_file);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::io(path, e)
    })?;

    tracing::trace!(path = %path.display(), bytes = content.len(), "Wrote file atomically");
    Ok(())
}

/// Read the full byte content of a file.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io(path, e))
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Remove a file, treating an already-missing file as success.
///
/// Returns whether a file was actually removed.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_atomic_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Gemfile");

        write_atomic(&path, b"source \"https://rubygems.org\"\n").unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(entries, vec!["Gemfile".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn write_atomic_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Gemfile");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        write_atomic(&path, b"new").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[cfg(unix)]
    #[test]
    fn write_atomic_writes_through_symlink() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        let real = temp.path().join("shared").join("Gemfile");
        fs::create_dir(temp.path().join("shared")).unwrap();
        fs::write(&real, "old").unwrap();
        let link = temp.path().join("Gemfile");
        symlink("shared/Gemfile", &link).unwrap();

        write_atomic(&link, b"new").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_resolves_to_target() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        let link = temp.path().join("Gemfile.lock");
        symlink("Gemfile.lock.real", &link).unwrap();

        assert_eq!(resolve_symlinks(&link).unwrap(), temp.path().join("Gemfile.lock.real"));
        write_atomic(&link, b"GEM\n").unwrap();
        assert_eq!(fs::read_to_string(temp.path().join("Gemfile.lock.real")).unwrap(), "GEM\n");
    }

    #[test]
    fn remove_missing_file_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let removed = remove_file_if_exists(&temp.path().join("Gemfile.lock")).unwrap();
        assert!(!removed);
    }
}
