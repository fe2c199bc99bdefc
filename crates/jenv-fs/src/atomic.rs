use crate::{Error, PermissionMode, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, Default)]
pub struct WriteOptions {
    pub permissions: PermissionMode,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn permissions(mut self, mode: PermissionMode) -> Self {
        self.permissions = mode;
        self
    }
}

/// What [`write_if_changed`] did to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Updated,
    Unchanged,
}

/// Write `content` to `path` via a temporary sibling and a rename.
///
/// The parent directory is created if needed. On failure the temporary file is
/// removed and the previous content of `path`, if any, is left untouched.
pub fn atomic_write(path: impl AsRef<Path>, content: &[u8], options: WriteOptions) -> Result<()> {
    let path = path.as_ref();
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| Error::NoParent {
            path: path.to_path_buf(),
        })?;

    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    fs::create_dir_all(parent).map_err(write_err)?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".tmp.")
        .suffix(".jenv")
        .tempfile_in(parent)
        .map_err(write_err)?;

    tmp.write_all(content).map_err(write_err)?;
    options
        .permissions
        .apply_to_file(tmp.as_file())
        .map_err(write_err)?;

    // Dropping the error's temp file handle removes it.
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    tracing::trace!(path = %path.display(), bytes = content.len(), "atomic write");
    Ok(())
}

/// Read a file, mapping "not found" to `None`.
pub fn read_optional(path: impl AsRef<Path>) -> Result<Option<Vec<u8>>> {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::Read {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Atomically write `content` unless the file already holds exactly those bytes.
pub fn write_if_changed(
    path: impl AsRef<Path>,
    content: &[u8],
    options: WriteOptions,
) -> Result<WriteOutcome> {
    let path = path.as_ref();
    let outcome = match read_optional(path)? {
        Some(existing) if existing == content => return Ok(WriteOutcome::Unchanged),
        Some(_) => WriteOutcome::Updated,
        None => WriteOutcome::Created,
    };
    atomic_write(path, content, options)?;
    Ok(outcome)
}

/// Remove a file. Returns `false` if it was already gone.
pub fn remove_if_exists(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Remove {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_creates_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("version");
        atomic_write(&path, b"temurin-17.0.9\n", WriteOptions::new()).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"temurin-17.0.9\n");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("paths");
        atomic_write(&path, b"a", WriteOptions::new()).unwrap();
        atomic_write(&path, b"b", WriteOptions::new()).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, ["paths"]);
    }

    #[test]
    fn test_atomic_write_rejects_bare_name() {
        let err = atomic_write("version", b"x", WriteOptions::new()).unwrap_err();
        assert!(matches!(err, Error::NoParent { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_with_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("java");
        atomic_write(
            &path,
            b"#!/bin/sh\n",
            WriteOptions::new().permissions(PermissionMode::Executable),
        )
        .unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn test_write_if_changed_outcomes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("javac");

        let first = write_if_changed(&path, b"one", WriteOptions::new()).unwrap();
        let second = write_if_changed(&path, b"one", WriteOptions::new()).unwrap();
        let third = write_if_changed(&path, b"two", WriteOptions::new()).unwrap();

        assert_eq!(first, WriteOutcome::Created);
        assert_eq!(second, WriteOutcome::Unchanged);
        assert_eq!(third, WriteOutcome::Updated);
    }

    #[test]
    fn test_read_optional_and_remove() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing");
        assert!(read_optional(&path).unwrap().is_none());
        assert!(!remove_if_exists(&path).unwrap());

        fs::write(&path, "x").unwrap();
        assert_eq!(read_optional(&path).unwrap().as_deref(), Some(&b"x"[..]));
        assert!(remove_if_exists(&path).unwrap());
        assert!(!path.exists());
    }
}
