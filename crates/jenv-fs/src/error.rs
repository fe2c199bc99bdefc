use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove {}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} has no parent directory", path.display())]
    NoParent { path: PathBuf },
}

impl Error {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::Write { path, .. }
            | Error::Read { path, .. }
            | Error::Remove { path, .. }
            | Error::NoParent { path } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
