//! Version parsing, ordering, and matching for Java runtimes.
//!
//! # Types
//!
//! - [`JavaVersion`]: a fully specified release (`17.0.9+9`, `1.8.0_292-b10`, `21-ea+35`)
//!   with a total order suitable for sorting a registry.
//! - [`VersionPrefix`]: a partial version used to select releases (`17`, `17.0`, `1.8`).
//! - [`Query`]: a prefix with an optional vendor qualifier (`temurin-17`).
//!
//! Legacy `1.x` numbering is normalized to the feature release, so `1.8.0_292`
//! and the prefix `8` refer to the same line.

pub use self::prefix::VersionPrefix;
pub use self::query::Query;
pub use self::version::JavaVersion;

mod prefix;
mod query;
mod version;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("invalid java version: {0}")]
    InvalidVersion(String),
    #[error("invalid version prefix: {0}")]
    InvalidPrefix(String),
    #[error("invalid version query: {0}")]
    InvalidQuery(String),
}

pub type Result<T> = std::result::Result<T, VersionError>;

/// Map legacy `1.x` numbering onto the feature release.
///
/// `1.8.0_292` becomes `(8, Some(0), Some(292))` and `1.8` becomes `(8, None, None)`.
/// The legacy micro component is always zero and carries no information.
pub(crate) fn normalize_legacy(
    major: u64,
    minor: Option<u64>,
    patch: Option<u64>,
    update: Option<u64>,
) -> (u64, Option<u64>, Option<u64>) {
    match (major, minor) {
        (1, Some(feature)) if feature >= 2 => match update {
            Some(update) => (feature, Some(0), Some(update)),
            None => (feature, None, None),
        },
        _ => (major, minor, patch),
    }
}
