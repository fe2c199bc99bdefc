//! Atomic file primitives.
//!
//! Every file jenv persists (selector files, the custom path list, generated shims) is
//! written through [`atomic_write`]: the content lands in a temporary sibling first and is
//! renamed over the target, so concurrent readers observe either the old or the new file.

pub use self::atomic::{
    WriteOptions, WriteOutcome, atomic_write, read_optional, remove_if_exists,
    write_if_changed,
};
pub use self::error::{Error, Result};
pub use self::permissions::{PermissionMode, is_executable};

mod atomic;
mod error;
mod permissions;
