use std::fs::File;
use std::path::Path;

/// File modes applied by [`crate::atomic_write`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PermissionMode {
    /// Keep whatever the temporary file was created with (`0o600` on Unix).
    #[default]
    Inherit,

    /// `0o644` on Unix; clears the readonly attribute on Windows.
    ReadWrite,

    /// `0o755` on Unix; clears the readonly attribute on Windows.
    Executable,
}

impl PermissionMode {
    pub fn to_unix_mode(self) -> Option<u32> {
        match self {
            PermissionMode::Inherit => None,
            PermissionMode::ReadWrite => Some(0o644),
            PermissionMode::Executable => Some(0o755),
        }
    }

    pub(crate) fn apply_to_file(self, file: &File) -> std::io::Result<()> {
        let Some(mode) = self.to_unix_mode() else {
            return Ok(());
        };

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(mode))
        }

        #[cfg(not(unix))]
        {
            let _ = mode;
            let mut perms = file.metadata()?.permissions();
            perms.set_readonly(false);
            file.set_permissions(perms)
        }
    }
}

/// Whether `path` is a regular file the current user may execute.
#[cfg(unix)]
pub fn is_executable(path: impl AsRef<Path>) -> bool {
    use nix::unistd::{AccessFlags, access};

    let path = path.as_ref();
    path.is_file() && access(path, AccessFlags::X_OK).is_ok()
}

/// Whether `path` is a regular file the current user may execute.
///
/// Windows has no execute bit; any existing file is considered runnable and callers
/// select candidates by extension.
#[cfg(not(unix))]
pub fn is_executable(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_unix_modes() {
        assert_eq!(PermissionMode::Inherit.to_unix_mode(), None);
        assert_eq!(PermissionMode::ReadWrite.to_unix_mode(), Some(0o644));
        assert_eq!(PermissionMode::Executable.to_unix_mode(), Some(0o755));
    }

    #[test]
    fn test_missing_file_is_not_executable() {
        let dir = tempdir().unwrap();
        assert!(!is_executable(dir.path().join("java")));
        assert!(!is_executable(dir.path()));
    }

    #[cfg(unix)]
    #[test]
    fn test_exec_bit_is_required() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("java");
        std::fs::write(&path, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
        assert!(!is_executable(&path));

        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert!(is_executable(&path));
    }
}
