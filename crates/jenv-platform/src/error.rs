use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("command failed: {cmd}, source: {source}")]
    CommandFailed { cmd: String, source: std::io::Error },

    #[error("command timed out after {}ms: {cmd}", timeout.as_millis())]
    Timeout { cmd: String, timeout: Duration },

    #[error("PATH entry contains a separator: {0}")]
    JoinPaths(#[from] std::env::JoinPathsError),
}
