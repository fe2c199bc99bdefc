use crate::installation::has_launcher;
use crate::metadata::{self, Metadata};
use crate::naming::Candidate;
use crate::vendor::install_dir_name;
use crate::{Error, JdkInstallation, Provenance, Registry, Result, ScanFailure, SearchPaths, Vendor};
use jenv_platform::exe;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Spawn the launcher when the `release` file gives no version.
    pub probe_launcher: bool,
    pub probe_timeout: Duration,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            probe_launcher: true,
            probe_timeout: Duration::from_millis(5000),
        }
    }
}

#[derive(Debug, Default)]
pub struct ScanReport {
    pub registry: Registry,
    pub warnings: Vec<ScanFailure>,
}

#[derive(Debug, Clone, Default)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Scan every search path and build a fresh registry.
    ///
    /// Each search path may be a JDK home itself or a directory of homes. Failures are
    /// isolated per candidate and collected in [`ScanReport::warnings`].
    pub fn scan(&self, paths: &SearchPaths) -> ScanReport {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        let mut warnings = Vec::new();

        for search in paths.iter() {
            if !search.path.exists() {
                if search.provenance == Provenance::WellKnown {
                    debug!(path = %search.path.display(), "skipping absent search path");
                } else {
                    debug!(path = %search.path.display(), "search path does not exist");
                    warnings.push(
                        Error::MissingSearchPath {
                            path: search.path.clone(),
                        }
                        .into(),
                    );
                }
                continue;
            }

            if let Some(home) = home_of(&search.path) {
                self.consider(home, search.provenance, &mut seen, &mut candidates, &mut warnings);
                continue;
            }

            match sorted_children(&search.path, &mut warnings) {
                Ok(children) => {
                    for child in children {
                        if let Some(home) = home_of(&child) {
                            self.consider(
                                home,
                                search.provenance,
                                &mut seen,
                                &mut candidates,
                                &mut warnings,
                            );
                        }
                    }
                }
                Err(source) => {
                    debug!(path = %search.path.display(), "cannot read search path: {source}");
                    warnings.push(
                        Error::ReadDir {
                            path: search.path.clone(),
                            source,
                        }
                        .into(),
                    );
                }
            }
        }

        let registry = Registry::from_candidates(candidates);
        debug!(
            installations = registry.len(),
            warnings = warnings.len(),
            "scan complete"
        );
        ScanReport { registry, warnings }
    }

    fn consider(
        &self,
        home: PathBuf,
        provenance: Provenance,
        seen: &mut HashSet<PathBuf>,
        candidates: &mut Vec<Candidate>,
        warnings: &mut Vec<ScanFailure>,
    ) {
        let home = home.canonicalize().unwrap_or(home);
        if !seen.insert(home.clone()) {
            debug!(home = %home.display(), "already discovered");
            return;
        }

        match self.inspect(&home, provenance, warnings) {
            Ok(candidate) => {
                debug!(
                    home = %home.display(),
                    vendor = %candidate.vendor,
                    version = %candidate.version,
                    "discovered JDK"
                );
                candidates.push(candidate);
            }
            Err(e) => {
                debug!(home = %home.display(), "skipping candidate: {e}");
                warnings.push(e.into());
            }
        }
    }

    fn inspect(
        &self,
        home: &Path,
        provenance: Provenance,
        warnings: &mut Vec<ScanFailure>,
    ) -> Result<Candidate> {
        let mut metadata = metadata::read_release_file(home).unwrap_or_default();

        if metadata.version.is_none() && self.options.probe_launcher {
            let launcher = home.join("bin").join(exe::java_launcher());
            match metadata::probe_launcher(home, &launcher, self.options.probe_timeout) {
                Ok(probed) => {
                    metadata.version = probed.version;
                    metadata.vendor = metadata.vendor.or(probed.vendor);
                }
                Err(e) => {
                    debug!(home = %home.display(), "launcher probe failed, using directory name: {e}");
                    warnings.push(e.into());
                }
            }
        }

        candidate_from(home, provenance, metadata)
    }
}

fn candidate_from(home: &Path, provenance: Provenance, metadata: Metadata) -> Result<Candidate> {
    let version = metadata
        .version
        .or_else(|| metadata::version_from_dir_name(&install_dir_name(home)))
        .ok_or_else(|| Error::UnknownVersion {
            path: home.to_path_buf(),
        })?;
    let vendor = metadata
        .vendor
        .as_deref()
        .and_then(Vendor::from_metadata)
        .unwrap_or_else(|| Vendor::from_path(home));

    Ok(Candidate {
        home: home.to_path_buf(),
        vendor,
        version,
        provenance,
    })
}

/// The JDK home at `dir`, if any: `dir` itself or a macOS bundle's `Contents/Home`.
pub fn home_of(dir: &Path) -> Option<PathBuf> {
    if has_launcher(dir) {
        return Some(dir.to_path_buf());
    }
    let bundle = dir.join("Contents").join("Home");
    has_launcher(&bundle).then_some(bundle)
}

/// Inspect a single home without spawning any process.
///
/// Used for path selectors that point outside the registry; the result carries
/// [`Provenance::Manual`].
pub fn inspect_home(path: &Path) -> Result<JdkInstallation> {
    let home = home_of(path).ok_or_else(|| Error::NotAHome {
        path: path.to_path_buf(),
    })?;
    let home = home.canonicalize().unwrap_or(home);
    let metadata = metadata::read_release_file(&home).unwrap_or_default();
    let candidate = candidate_from(&home, Provenance::Manual, metadata)?;
    let name = candidate.base_name();
    Ok(candidate.into_installation(name))
}

fn sorted_children(dir: &Path, warnings: &mut Vec<ScanFailure>) -> std::io::Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)?.map(|entry| entry.map(|e| e.path()));
    Ok(collect_dirs(dir, entries, warnings))
}

/// The directories among `entries`, sorted. An unreadable entry is recorded and
/// skipped; its siblings are still returned.
fn collect_dirs(
    dir: &Path,
    entries: impl IntoIterator<Item = std::io::Result<PathBuf>>,
    warnings: &mut Vec<ScanFailure>,
) -> Vec<PathBuf> {
    let mut children = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_dir() => children.push(path),
            Ok(_) => {}
            Err(source) => {
                debug!(path = %dir.display(), "skipping unreadable entry: {source}");
                warnings.push(
                    Error::ReadDir {
                        path: dir.to_path_buf(),
                        source,
                    }
                    .into(),
                );
            }
        }
    }
    children.sort();
    children
}
