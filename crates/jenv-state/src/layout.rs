use crate::{Error, Result};
use jenv_platform::env::EnvSnapshot;
use std::path::{Path, PathBuf};

/// Overrides the jenv root directory.
pub const ROOT_VAR: &str = "JENV_DIR";
/// Shell-scope selector.
pub const SHELL_VAR: &str = "JENV_VERSION";
/// Local-scope marker file name.
pub const LOCAL_FILE: &str = ".jenv-version";

/// Paths under the jenv root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JenvHome {
    root: PathBuf,
}

impl JenvHome {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `$JENV_DIR`, or `~/.jenv`.
    pub fn from_env(env: &EnvSnapshot) -> Result<Self> {
        if let Some(root) = env.get_non_empty(ROOT_VAR) {
            return Ok(Self::new(root));
        }
        let home = jenv_platform::dir::user_home(env).ok_or(Error::NoHome)?;
        Ok(Self::new(home.join(".jenv")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn version_file(&self) -> PathBuf {
        self.root.join("version")
    }

    pub fn paths_file(&self) -> PathBuf {
        self.root.join("paths")
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    pub fn shims_dir(&self) -> PathBuf {
        self.root.join("shims")
    }

    pub fn versions_dir(&self) -> PathBuf {
        self.root.join("versions")
    }
}
