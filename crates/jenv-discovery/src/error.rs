use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{} is not a JDK home: no launcher at bin/{}", path.display(), jenv_platform::exe::java_launcher())]
    NotAHome { path: PathBuf },

    #[error("could not determine the Java version of {}", path.display())]
    UnknownVersion { path: PathBuf },

    #[error("search path {} does not exist", path.display())]
    MissingSearchPath { path: PathBuf },

    #[error("failed to read directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("launcher probe failed for {}", path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: jenv_platform::Error,
    },

    #[error("launcher probe for {} reported no version property", path.display())]
    ProbeOutput { path: PathBuf },
}

impl Error {
    pub fn path(&self) -> &Path {
        match self {
            Error::NotAHome { path }
            | Error::UnknownVersion { path }
            | Error::MissingSearchPath { path }
            | Error::ReadDir { path, .. }
            | Error::Probe { path, .. }
            | Error::ProbeOutput { path } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// A failure isolated to one candidate or search path during a scan.
#[derive(Debug)]
pub struct ScanFailure {
    pub error: Error,
}

impl ScanFailure {
    pub fn path(&self) -> &Path {
        self.error.path()
    }
}

impl From<Error> for ScanFailure {
    fn from(error: Error) -> Self {
        Self { error }
    }
}

impl std::fmt::Display for ScanFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)?;
        let mut source = std::error::Error::source(&self.error);
        while let Some(err) = source {
            write!(f, ": {err}")?;
            source = err.source();
        }
        Ok(())
    }
}
