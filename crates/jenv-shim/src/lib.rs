//! Shim mechanism for Java tools.
//!
//! # Architecture
//!
//! A shim is a tiny script on `PATH`, one per tool name, whose only behavior is to call
//! `jenv exec <tool> "$@"`. The [`Dispatcher`] behind that command asks a
//! [`TargetResolver`] for an installation, verifies the tool exists in it, and replaces
//! the process with the real binary. The JDK precedence policy lives in the resolver;
//! the shim itself carries no version state.
//!
//! [`ShimGenerator`] keeps the shim directory in sync with the union of tool names
//! across the registry.
//!
//! # Example
//!
//! ```no_run
//! use jenv_shim::{Dispatcher, JdkResolver};
//! # fn run(resolver: JdkResolver<'_>, env: jenv_platform::env::EnvSnapshot) -> Result<(), jenv_shim::DispatchError> {
//! let launch = Dispatcher::new(resolver).prepare("javac", vec!["-version".into()], &env)?;
//! launch.exec()?;
//! # Ok(())
//! # }
//! ```

pub use error::{DispatchError, RehashError};
pub use dispatch::{Dispatcher, Launch};
pub use rehash::{RehashReport, SHIM_MARKER, ShimGenerator};
pub use resolver::{JdkResolver, TargetResolver};

mod dispatch;
mod error;
mod rehash;
mod resolver;
