//! Selector sources and their precedence chains.

use crate::Result;
use jenv_platform::env::EnvSnapshot;
use jenv_state::{Selector, VersionStore};
use std::path::Path;

/// Everything a source may look at. Nothing is read from the process.
#[derive(Debug, Clone, Copy)]
pub struct Inputs<'a> {
    pub cwd: &'a Path,
    pub env: &'a EnvSnapshot,
    pub store: &'a VersionStore,
}

pub trait SelectorSource {
    /// The selector this scope holds, if any.
    fn select(&self, inputs: &Inputs<'_>) -> Result<Option<Selector>>;
}

/// `JENV_VERSION`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellScope;

impl SelectorSource for ShellScope {
    fn select(&self, inputs: &Inputs<'_>) -> Result<Option<Selector>> {
        Ok(inputs.store.shell(inputs.env))
    }
}

/// The nearest `.jenv-version` at or above the working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalScope;

impl SelectorSource for LocalScope {
    fn select(&self, inputs: &Inputs<'_>) -> Result<Option<Selector>> {
        Ok(inputs.store.local(inputs.cwd)?)
    }
}

/// `<root>/version`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalScope;

impl SelectorSource for GlobalScope {
    fn select(&self, inputs: &Inputs<'_>) -> Result<Option<Selector>> {
        Ok(inputs.store.global()?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PairSource<S1, S2> {
    primary: S1,
    fallback: S2,
}

impl<S1, S2> PairSource<S1, S2>
where
    S1: SelectorSource,
    S2: SelectorSource,
{
    pub fn new(primary: S1, fallback: S2) -> Self {
        Self { primary, fallback }
    }
}

impl<S1, S2> SelectorSource for PairSource<S1, S2>
where
    S1: SelectorSource,
    S2: SelectorSource,
{
    fn select(&self, inputs: &Inputs<'_>) -> Result<Option<Selector>> {
        match self.primary.select(inputs)? {
            Some(selector) => Ok(Some(selector)),
            None => self.fallback.select(inputs),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TripleSource<S1, S2, S3> {
    first: S1,
    second: S2,
    third: S3,
}

impl<S1, S2, S3> TripleSource<S1, S2, S3>
where
    S1: SelectorSource,
    S2: SelectorSource,
    S3: SelectorSource,
{
    pub fn new(first: S1, second: S2, third: S3) -> Self {
        Self {
            first,
            second,
            third,
        }
    }
}

impl<S1, S2, S3> SelectorSource for TripleSource<S1, S2, S3>
where
    S1: SelectorSource,
    S2: SelectorSource,
    S3: SelectorSource,
{
    fn select(&self, inputs: &Inputs<'_>) -> Result<Option<Selector>> {
        if let Some(selector) = self.first.select(inputs)? {
            return Ok(Some(selector));
        }
        if let Some(selector) = self.second.select(inputs)? {
            return Ok(Some(selector));
        }
        self.third.select(inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jenv_state::{JenvHome, SHELL_VAR, Scope};

    struct Fixed(Option<&'static str>);

    impl SelectorSource for Fixed {
        fn select(&self, _inputs: &Inputs<'_>) -> Result<Option<Selector>> {
            Ok(self.0.map(|value| Selector {
                scope: Scope::Global,
                value: value.to_string(),
                file: None,
            }))
        }
    }

    fn with_inputs<T>(f: impl FnOnce(&Inputs<'_>) -> T) -> T {
        let dir = tempfile::tempdir().unwrap();
        let store = VersionStore::new(JenvHome::new(dir.path()));
        let env = EnvSnapshot::new().with(SHELL_VAR, "shell-17");
        f(&Inputs {
            cwd: dir.path(),
            env: &env,
            store: &store,
        })
    }

    fn value(selector: Option<Selector>) -> Option<String> {
        selector.map(|s| s.value)
    }

    #[test]
    fn test_pair_source_fallback() {
        with_inputs(|inputs| {
            let pair = PairSource::new(Fixed(None), Fixed(Some("b")));
            assert_eq!(value(pair.select(inputs).unwrap()).as_deref(), Some("b"));

            let pair = PairSource::new(Fixed(Some("a")), Fixed(Some("b")));
            assert_eq!(value(pair.select(inputs).unwrap()).as_deref(), Some("a"));
        });
    }

    #[test]
    fn test_triple_source_chain() {
        with_inputs(|inputs| {
            let chain = TripleSource::new(Fixed(None), Fixed(None), Fixed(Some("c")));
            assert_eq!(value(chain.select(inputs).unwrap()).as_deref(), Some("c"));

            let chain = TripleSource::new(Fixed(None), Fixed(None), Fixed(None));
            assert!(chain.select(inputs).unwrap().is_none());
        });
    }

    #[test]
    fn test_shell_scope_reads_snapshot() {
        with_inputs(|inputs| {
            let selector = ShellScope.select(inputs).unwrap().unwrap();
            assert_eq!(selector.scope, Scope::Shell);
            assert_eq!(selector.value, "shell-17");
            assert!(GlobalScope.select(inputs).unwrap().is_none());
        });
    }
}
