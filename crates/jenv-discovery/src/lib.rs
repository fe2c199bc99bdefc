//! Discovery of installed JDKs.
//!
//! The [`Scanner`] walks a [`SearchPaths`] list, verifies each candidate home by the
//! presence of its Java launcher, reads version and vendor metadata, and returns a
//! [`ScanReport`]: an immutable [`Registry`] with unique canonical names plus the
//! per-candidate failures that were isolated along the way.
//!
//! ```no_run
//! use jenv_discovery::{ScanOptions, Scanner, SearchPaths};
//! use jenv_platform::env::EnvSnapshot;
//! use std::path::Path;
//!
//! let env = EnvSnapshot::from_process();
//! let paths = SearchPaths::new().with_defaults(Path::new("/home/me/.jenv"), &env);
//! let report = Scanner::new(ScanOptions::default()).scan(&paths);
//! for jdk in report.registry.iter() {
//!     println!("{} {}", jdk.name, jdk.home.display());
//! }
//! ```

pub use self::error::{Error, Result, ScanFailure};
pub use self::installation::{JdkInstallation, Provenance};
pub use self::registry::Registry;
pub use self::scanner::{ScanOptions, ScanReport, Scanner, home_of, inspect_home};
pub use self::search::{SearchPath, SearchPaths};
pub use self::vendor::Vendor;

mod error;
mod installation;
mod metadata;
mod naming;
mod registry;
mod scanner;
mod search;
mod vendor;
