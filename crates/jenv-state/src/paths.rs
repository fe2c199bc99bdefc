use crate::{Error, JenvHome, Result};
use jenv_fs::{PermissionMode, WriteOptions, atomic_write, read_optional};
use std::path::{Path, PathBuf};

/// The user's ordered list of extra search directories (`<root>/paths`).
///
/// One absolute path per line; blank lines and `#` comments are ignored and dropped
/// on the next write.
#[derive(Debug, Clone)]
pub struct CustomPaths {
    file: PathBuf,
}

impl CustomPaths {
    pub fn new(home: &JenvHome) -> Self {
        Self {
            file: home.paths_file(),
        }
    }

    pub fn list(&self) -> Result<Vec<PathBuf>> {
        let Some(bytes) = read_optional(&self.file).map_err(Error::Read)? else {
            return Ok(Vec::new());
        };
        let text = String::from_utf8_lossy(&bytes);
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(PathBuf::from)
            .collect())
    }

    /// Append `path`. Returns `false` if it was already listed.
    pub fn add(&self, path: &Path) -> Result<bool> {
        if !path.is_absolute() {
            return Err(Error::RelativePath(path.to_path_buf()));
        }
        let mut paths = self.list()?;
        if paths.iter().any(|p| p == path) {
            return Ok(false);
        }
        paths.push(path.to_path_buf());
        self.write(&paths)?;
        Ok(true)
    }

    /// Remove `path`. Returns `false` if it was not listed.
    pub fn remove(&self, path: &Path) -> Result<bool> {
        let mut paths = self.list()?;
        let before = paths.len();
        paths.retain(|p| p != path);
        if paths.len() == before {
            return Ok(false);
        }
        self.write(&paths)?;
        Ok(true)
    }

    fn write(&self, paths: &[PathBuf]) -> Result<()> {
        let content: String = paths
            .iter()
            .map(|p| format!("{}\n", p.display()))
            .collect();
        let options = WriteOptions::new().permissions(PermissionMode::ReadWrite);
        atomic_write(&self.file, content.as_bytes(), options).map_err(Error::Persist)
    }
}
