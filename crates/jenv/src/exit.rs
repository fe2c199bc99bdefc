//! Process exit codes.

use jenv_resolve::ResolveError;
use jenv_shim::{DispatchError, RehashError};

pub const FAILURE: i32 = 1;
pub const SCAN_FAILURE: i32 = 14;
pub const PERSIST_ERROR: i32 = 16;

/// Failures raised by the command layer itself.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("no JDK found and {0} search path(s) could not be scanned")]
    ScanFailed(usize),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ScanFailed(_) => SCAN_FAILURE,
        }
    }
}

/// The exit code for the first typed error found in the chain.
pub fn code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<DispatchError>() {
            return e.exit_code();
        }
        if let Some(e) = cause.downcast_ref::<ResolveError>() {
            return e.exit_code();
        }
        if let Some(e) = cause.downcast_ref::<RehashError>() {
            return e.exit_code();
        }
        if let Some(e) = cause.downcast_ref::<CliError>() {
            return e.exit_code();
        }
        if let Some(jenv_state::Error::Persist(_)) = cause.downcast_ref::<jenv_state::Error>() {
            return PERSIST_ERROR;
        }
    }
    FAILURE
}
