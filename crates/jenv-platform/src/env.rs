//! Explicit environment snapshots and PATH editing.
//!
//! Nothing here reads the process environment except [`EnvSnapshot::from_process`];
//! resolution and dispatch take a snapshot as input instead.

use crate::error::Result;
use std::collections::BTreeMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

#[cfg(windows)]
const PATH_VAR: &str = "Path";
#[cfg(not(windows))]
const PATH_VAR: &str = "PATH";

/// An owned copy of a process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<OsString, OsString>,
}

impl EnvSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_process() -> Self {
        env::vars_os().collect()
    }

    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    /// A variable's value, treating an empty value as unset.
    pub fn get_non_empty(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.set(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    pub fn path(&self) -> Option<&OsStr> {
        self.get(path_key(self))
    }

    pub fn set_path(&mut self, value: OsString) {
        let key = path_key(self).to_os_string();
        self.vars.insert(key, value);
    }
}

impl<K: Into<OsString>, V: Into<OsString>> FromIterator<(K, V)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// Windows variable names are case-insensitive; reuse whichever spelling is present.
fn path_key(snapshot: &EnvSnapshot) -> &OsStr {
    if cfg!(windows) {
        snapshot
            .vars
            .keys()
            .find(|k| k.eq_ignore_ascii_case(PATH_VAR))
            .map(OsString::as_os_str)
            .unwrap_or(OsStr::new(PATH_VAR))
    } else {
        OsStr::new(PATH_VAR)
    }
}

fn paths_equal(p1: &Path, p2: &Path) -> bool {
    fn normalize(p: &Path) -> String {
        let s = p.to_string_lossy();
        let s = s.trim_end_matches(['/', '\\']);
        if cfg!(windows) {
            s.to_lowercase()
        } else {
            s.to_string()
        }
    }
    normalize(p1) == normalize(p2)
}

/// Edits a PATH-style list without touching the process environment.
#[derive(Debug, Clone, Default)]
pub struct PathModifier {
    paths: Vec<PathBuf>,
}

impl PathModifier {
    pub fn new(value: Option<&OsStr>) -> Self {
        Self {
            paths: value
                .map(|v| env::split_paths(v).collect())
                .unwrap_or_default(),
        }
    }

    /// Move `path` to the front, dropping any later duplicates.
    pub fn prepend(mut self, path: PathBuf) -> Self {
        self.paths.retain(|p| !paths_equal(p, &path));
        self.paths.insert(0, path);
        self
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| paths_equal(p, path))
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn build(self) -> Result<OsString> {
        Ok(env::join_paths(self.paths)?)
    }
}
