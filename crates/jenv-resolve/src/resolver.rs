use crate::matcher::match_value;
use crate::source::{GlobalScope, Inputs, LocalScope, SelectorSource, ShellScope, TripleSource};
use crate::{ResolveError, Result};
use jenv_discovery::{JdkInstallation, Registry};
use jenv_platform::env::EnvSnapshot;
use jenv_state::{Selector, VersionStore};
use std::path::Path;

/// Why an installation was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Selector(Selector),
    /// No scope held a selector; the externally supplied default was used.
    SystemDefault,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Selector(selector) => write!(f, "set by {}", selector.origin()),
            Origin::SystemDefault => f.write_str("system default (JAVA_HOME)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub installation: JdkInstallation,
    pub origin: Origin,
}

pub type DefaultPrecedence = TripleSource<ShellScope, LocalScope, GlobalScope>;

/// Picks the active installation: shell, then local, then global, then the system
/// default.
pub struct Resolver<'a, S = DefaultPrecedence> {
    registry: &'a Registry,
    store: &'a VersionStore,
    sources: S,
    system_default: Option<JdkInstallation>,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry, store: &'a VersionStore) -> Self {
        Self::with_sources(
            registry,
            store,
            TripleSource::new(ShellScope, LocalScope, GlobalScope),
        )
    }
}

impl<'a, S: SelectorSource> Resolver<'a, S> {
    pub fn with_sources(registry: &'a Registry, store: &'a VersionStore, sources: S) -> Self {
        Self {
            registry,
            store,
            sources,
            system_default: None,
        }
    }

    /// Used only when no scope holds a selector.
    pub fn system_default(mut self, installation: Option<JdkInstallation>) -> Self {
        self.system_default = installation;
        self
    }

    pub fn resolve(&self, cwd: &Path, env: &EnvSnapshot) -> Result<Resolution> {
        let inputs = Inputs {
            cwd,
            env,
            store: self.store,
        };

        let selected = match self.sources.select(&inputs) {
            Err(ResolveError::State(jenv_state::Error::Read(e))) => {
                return Err(unreadable_selector(&e));
            }
            other => other?,
        };

        match selected {
            Some(selector) => self.resolve_selector(selector, cwd),
            None => match &self.system_default {
                Some(installation) => {
                    tracing::debug!(name = %installation.name, "using system default");
                    Ok(Resolution {
                        installation: installation.clone(),
                        origin: Origin::SystemDefault,
                    })
                }
                None => Err(ResolveError::NoVersionConfigured),
            },
        }
    }

    /// Resolve one selector. Failure is final; lower scopes are never consulted.
    pub fn resolve_selector(&self, selector: Selector, cwd: &Path) -> Result<Resolution> {
        let invalid = |reason: String| ResolveError::InvalidSelector {
            origin: selector.origin(),
            value: selector.value.clone(),
            reason,
        };

        if selector.value.is_empty() {
            return Err(invalid("the selector is empty".to_string()));
        }

        let base_dir = selector
            .file
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(cwd);

        let installation = match match_value(self.registry, &selector.value, base_dir) {
            Ok(installation) => installation,
            Err(e @ ResolveError::Ambiguous { .. }) => return Err(e),
            Err(e @ ResolveError::State(_)) => return Err(e),
            Err(e) => return Err(invalid(e.to_string())),
        };

        if !installation.is_present() {
            return Err(invalid(format!(
                "{} no longer contains a Java launcher",
                installation.home.display()
            )));
        }

        tracing::debug!(
            scope = %selector.scope,
            name = %installation.name,
            "resolved selector"
        );
        Ok(Resolution {
            installation,
            origin: Origin::Selector(selector),
        })
    }
}

/// A selector file that exists but cannot be read is still an explicit choice.
fn unreadable_selector(e: &jenv_fs::Error) -> ResolveError {
    let reason = match std::error::Error::source(e) {
        Some(source) => format!("the file cannot be read: {source}"),
        None => e.to_string(),
    };
    ResolveError::InvalidSelector {
        origin: format!("selector file {}", e.path().display()),
        value: String::new(),
        reason,
    }
}
