use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot locate the user's home directory; set JENV_DIR")]
    NoHome,

    #[error("failed to persist jenv state")]
    Persist(#[source] jenv_fs::Error),

    #[error("failed to read jenv state")]
    Read(#[source] jenv_fs::Error),

    #[error("{} is not an absolute path", .0.display())]
    RelativePath(PathBuf),

    #[error("invalid settings")]
    Settings(#[from] Box<figment::Error>),
}

pub type Result<T> = std::result::Result<T, Error>;
