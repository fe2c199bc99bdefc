//! Error types for shim operations.

use jenv_resolve::ResolveError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("'{tool}' is not available in {}", home.display())]
    MissingExecutable { tool: String, home: PathBuf },

    #[error("failed to execute {}", program.display())]
    Exec {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot build PATH for the target")]
    Path(#[from] jenv_platform::Error),
}

impl DispatchError {
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::Resolve(e) => e.exit_code(),
            DispatchError::MissingExecutable { .. } => 13,
            DispatchError::Exec { .. } => 126,
            DispatchError::Path(_) => 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum RehashError {
    #[error("failed to write shim")]
    Write(#[source] jenv_fs::Error),

    #[error("failed to remove stale shim")]
    Remove(#[source] jenv_fs::Error),

    #[error("failed to read shim directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RehashError {
    pub fn exit_code(&self) -> i32 {
        match self {
            RehashError::Write(_) | RehashError::Remove(_) => 16,
            RehashError::ReadDir { .. } => 1,
        }
    }
}
