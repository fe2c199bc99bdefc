use crate::{Error, JenvHome, LOCAL_FILE, Result, SHELL_VAR};
use jenv_fs::{PermissionMode, WriteOptions, atomic_write, read_optional, remove_if_exists};
use jenv_platform::env::EnvSnapshot;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Upper bound on directories visited while looking for a local selector.
pub const MAX_WALK_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    Shell,
    Local,
    Global,
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Scope::Shell => "shell",
            Scope::Local => "local",
            Scope::Global => "global",
        })
    }
}

/// A persisted reference to an installation: a canonical name, a path, or a
/// version query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub scope: Scope,
    /// Trimmed first line of the file, or the variable's value. May be empty for a
    /// selector file that exists but holds nothing.
    pub value: String,
    /// The file the selector was read from; `None` for the shell scope.
    pub file: Option<PathBuf>,
}

impl Selector {
    /// Where the selector was set, for messages.
    pub fn origin(&self) -> String {
        match &self.file {
            Some(file) => format!("{} ({})", self.scope, file.display()),
            None => format!("{} ({SHELL_VAR})", self.scope),
        }
    }
}

/// Reads and writes the three selector scopes.
#[derive(Debug, Clone)]
pub struct VersionStore {
    home: JenvHome,
}

impl VersionStore {
    pub fn new(home: JenvHome) -> Self {
        Self { home }
    }

    pub fn home(&self) -> &JenvHome {
        &self.home
    }

    /// The shell selector. An empty variable counts as unset.
    pub fn shell(&self, env: &EnvSnapshot) -> Option<Selector> {
        let value = env.get_non_empty(SHELL_VAR)?;
        Some(Selector {
            scope: Scope::Shell,
            value: value.to_string_lossy().trim().to_string(),
            file: None,
        })
    }

    /// The nearest `.jenv-version` at or above `cwd`.
    pub fn local(&self, cwd: &Path) -> Result<Option<Selector>> {
        let Some(file) = find_local_file(cwd) else {
            return Ok(None);
        };
        read_selector(Scope::Local, file)
    }

    pub fn global(&self) -> Result<Option<Selector>> {
        read_selector(Scope::Global, self.home.version_file())
    }

    pub fn set_global(&self, value: &str) -> Result<PathBuf> {
        let file = self.home.version_file();
        write_selector(&file, value)?;
        Ok(file)
    }

    pub fn unset_global(&self) -> Result<bool> {
        remove_if_exists(self.home.version_file()).map_err(Error::Persist)
    }

    pub fn set_local(&self, dir: &Path, value: &str) -> Result<PathBuf> {
        let file = dir.join(LOCAL_FILE);
        write_selector(&file, value)?;
        Ok(file)
    }

    pub fn unset_local(&self, dir: &Path) -> Result<bool> {
        remove_if_exists(dir.join(LOCAL_FILE)).map_err(Error::Persist)
    }
}

fn find_local_file(cwd: &Path) -> Option<PathBuf> {
    let mut visited = HashSet::new();
    let mut dir = Some(cwd);
    for _ in 0..MAX_WALK_DEPTH {
        let current = dir?;
        if !visited.insert(current.to_path_buf()) {
            return None;
        }
        let candidate = current.join(LOCAL_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = current.parent();
    }
    tracing::debug!(cwd = %cwd.display(), "stopped local selector walk at depth limit");
    None
}

fn read_selector(scope: Scope, file: PathBuf) -> Result<Option<Selector>> {
    let Some(bytes) = read_optional(&file).map_err(Error::Read)? else {
        return Ok(None);
    };
    let text = String::from_utf8_lossy(&bytes);
    let value = text
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or_default()
        .to_string();
    tracing::debug!(%scope, file = %file.display(), %value, "read selector");
    Ok(Some(Selector {
        scope,
        value,
        file: Some(file),
    }))
}

fn write_selector(file: &Path, value: &str) -> Result<()> {
    let content = format!("{}\n", value.trim());
    let options = WriteOptions::new().permissions(PermissionMode::ReadWrite);
    atomic_write(file, content.as_bytes(), options).map_err(Error::Persist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store(root: &Path) -> VersionStore {
        VersionStore::new(JenvHome::new(root))
    }

    #[test]
    fn test_shell_selector() {
        let dir = tempdir().unwrap();
        let store = store(dir.path());

        assert!(store.shell(&EnvSnapshot::new()).is_none());
        assert!(store.shell(&EnvSnapshot::new().with(SHELL_VAR, "")).is_none());

        let selector = store
            .shell(&EnvSnapshot::new().with(SHELL_VAR, " temurin-17.0.9 "))
            .unwrap();
        assert_eq!(selector.scope, Scope::Shell);
        assert_eq!(selector.value, "temurin-17.0.9");
        assert_eq!(selector.file, None);
    }

    #[test]
    fn test_global_roundtrip() {
        let dir = tempdir().unwrap();
        let store = store(dir.path());
        assert!(store.global().unwrap().is_none());

        let file = store.set_global("17").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "17\n");
        let selector = store.global().unwrap().unwrap();
        assert_eq!(selector.value, "17");
        assert_eq!(selector.file.as_deref(), Some(file.as_path()));

        assert!(store.unset_global().unwrap());
        assert!(!store.unset_global().unwrap());
        assert!(store.global().unwrap().is_none());
    }

    #[test]
    fn test_empty_file_is_an_empty_selector() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("version"), "\n  \n").unwrap();
        let selector = store(dir.path()).global().unwrap().unwrap();
        assert_eq!(selector.value, "");
    }

    #[test]
    fn test_local_walks_upward_to_nearest() {
        let dir = tempdir().unwrap();
        let store = store(&dir.path().join("root"));
        let project = dir.path().join("project");
        let module = project.join("module").join("src");
        std::fs::create_dir_all(&module).unwrap();

        assert!(store.local(&module).unwrap().is_none());

        store.set_local(&project, "11").unwrap();
        let selector = store.local(&module).unwrap().unwrap();
        assert_eq!(selector.value, "11");
        assert_eq!(selector.file, Some(project.join(LOCAL_FILE)));

        store.set_local(&project.join("module"), "17").unwrap();
        assert_eq!(store.local(&module).unwrap().unwrap().value, "17");

        assert!(store.unset_local(&project.join("module")).unwrap());
        assert_eq!(store.local(&module).unwrap().unwrap().value, "11");
    }

    #[test]
    fn test_local_ignores_directories_named_like_marker() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(LOCAL_FILE)).unwrap();
        assert!(store(dir.path()).local(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_walk_is_bounded() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(LOCAL_FILE), "17\n").unwrap();
        let mut deep = dir.path().to_path_buf();
        for i in 0..MAX_WALK_DEPTH {
            deep.push(format!("d{i}"));
        }
        // The marker sits beyond the depth limit; the path need not exist.
        assert!(find_local_file(&deep).is_none());
        assert_eq!(
            find_local_file(dir.path().join("a").as_path()),
            Some(dir.path().join(LOCAL_FILE))
        );
    }
}
