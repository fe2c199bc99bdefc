//! Selecting the active JDK.
//!
//! Resolution is a pure function of the working directory, an environment snapshot,
//! a [`Registry`](jenv_discovery::Registry) and the on-disk selector state. Scopes are
//! consulted through [`SelectorSource`]s chained in precedence order; the first scope
//! that holds a selector decides, and a selector that cannot be satisfied is an error
//! rather than a reason to fall through.

pub use self::error::{ResolveError, Result};
pub use self::matcher::match_value;
pub use self::resolver::{DefaultPrecedence, Origin, Resolution, Resolver};
pub use self::source::{
    GlobalScope, Inputs, LocalScope, PairSource, SelectorSource, ShellScope, TripleSource,
};

mod error;
mod matcher;
mod resolver;
mod source;
