//! Target resolver abstraction for the dispatcher.
//!
//! `TargetResolver` is the only contract between the shim mechanism and the JDK
//! selection policy.

use jenv_platform::env::EnvSnapshot;
use jenv_resolve::{Resolution, ResolveError, Resolver};
use std::path::Path;

pub trait TargetResolver {
    /// The installation that should serve `tool`.
    fn resolve(&self, tool: &str) -> Result<Resolution, ResolveError>;
}

impl<F> TargetResolver for F
where
    F: Fn(&str) -> Result<Resolution, ResolveError>,
{
    fn resolve(&self, tool: &str) -> Result<Resolution, ResolveError> {
        self(tool)
    }
}

/// Shell/local/global precedence evaluated for one working directory and environment.
///
/// Every tool resolves to the same installation; the tool name only matters once the
/// dispatcher looks inside its `bin` directory.
pub struct JdkResolver<'a> {
    resolver: Resolver<'a>,
    cwd: &'a Path,
    env: &'a EnvSnapshot,
}

impl<'a> JdkResolver<'a> {
    pub fn new(resolver: Resolver<'a>, cwd: &'a Path, env: &'a EnvSnapshot) -> Self {
        Self { resolver, cwd, env }
    }
}

impl TargetResolver for JdkResolver<'_> {
    fn resolve(&self, tool: &str) -> Result<Resolution, ResolveError> {
        let resolution = self.resolver.resolve(self.cwd, self.env)?;
        tracing::debug!(tool, name = %resolution.installation.name, "dispatching");
        Ok(resolution)
    }
}
