use crate::Provenance;
use crate::installation::has_launcher;
use jenv_platform::env::EnvSnapshot;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    pub path: PathBuf,
    pub provenance: Provenance,
}

/// Ordered, duplicate-free list of directories to scan.
///
/// Order decides only which duplicate home keeps its provenance and how canonical-name
/// collisions are broken; it never affects resolution precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPaths {
    entries: Vec<SearchPath>,
}

impl SearchPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<PathBuf>, provenance: Provenance) {
        let path = path.into();
        if !self.entries.iter().any(|e| e.path == path) {
            self.entries.push(SearchPath { path, provenance });
        }
    }

    /// Built-in locations for this platform, SDKMAN, and `<root>/versions`.
    ///
    /// User and program directories are taken from `env`.
    pub fn with_defaults(mut self, jenv_root: &Path, env: &EnvSnapshot) -> Self {
        for path in platform_defaults(env) {
            self.push(path, Provenance::WellKnown);
        }
        if let Some(home) = jenv_platform::dir::user_home(env) {
            self.push(
                home.join(".sdkman").join("candidates").join("java"),
                Provenance::WellKnown,
            );
        }
        self.push(jenv_root.join("versions"), Provenance::WellKnown);
        self
    }

    pub fn with_custom(mut self, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        for path in paths {
            self.push(path, Provenance::CustomPath);
        }
        self
    }

    /// `JAVA_HOME` and `JDK_HOME`, when they point at a JDK home.
    pub fn with_java_home(mut self, env: &EnvSnapshot) -> Self {
        for var in ["JAVA_HOME", "JDK_HOME"] {
            let Some(value) = env.get_non_empty(var) else {
                continue;
            };
            let path = PathBuf::from(value);
            if has_launcher(&path) {
                self.push(path, Provenance::Manual);
            } else {
                tracing::debug!(var, path = %path.display(), "ignoring variable: not a JDK home");
            }
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchPath> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(target_os = "linux")]
fn platform_defaults(_env: &EnvSnapshot) -> Vec<PathBuf> {
    vec![PathBuf::from("/usr/lib/jvm"), PathBuf::from("/usr/java")]
}

#[cfg(target_os = "macos")]
fn platform_defaults(_env: &EnvSnapshot) -> Vec<PathBuf> {
    vec![
        PathBuf::from("/Library/Java/JavaVirtualMachines"),
        PathBuf::from("/opt/homebrew/opt"),
        PathBuf::from("/usr/local/opt"),
    ]
}

#[cfg(windows)]
fn platform_defaults(env: &EnvSnapshot) -> Vec<PathBuf> {
    let Some(program_files) = jenv_platform::dir::program_files(env) else {
        return Vec::new();
    };
    vec![
        program_files.join("Java"),
        program_files.join("Eclipse Adoptium"),
        program_files.join("Microsoft").join("jdk"),
    ]
}

#[cfg(not(any(target_os = "linux", target_os = "macos", windows)))]
fn platform_defaults(_env: &EnvSnapshot) -> Vec<PathBuf> {
    Vec::new()
}
