use crate::vendor::install_dir_name;
use crate::{JdkInstallation, Provenance, Vendor};
use jenv_version::JavaVersion;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// An inspected home that has not been given its registry name yet.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub home: PathBuf,
    pub vendor: Vendor,
    pub version: JavaVersion,
    pub provenance: Provenance,
}

impl Candidate {
    /// `<vendor>-<major.minor.patch>`; unknown vendors use the sanitized directory name.
    pub fn base_name(&self) -> String {
        let prefix = match self.vendor {
            Vendor::Unknown => sanitize(&install_dir_name(&self.home)),
            vendor => vendor.slug().to_string(),
        };
        if prefix.is_empty() {
            self.version.short()
        } else {
            format!("{prefix}-{}", self.version.short())
        }
    }

    pub fn into_installation(self, name: String) -> JdkInstallation {
        JdkInstallation {
            name,
            home: self.home,
            vendor: self.vendor,
            version: self.version,
            provenance: self.provenance,
        }
    }
}

fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars().map(|c| c.to_ascii_lowercase()) {
        if c.is_ascii_alphanumeric() || c == '-' {
            out.push(c);
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}

/// Assign unique canonical names, in discovery order.
///
/// Names that occur once are kept as is. Within a colliding group, members with a
/// build number take `<base>+<build>`; whoever still collides gets `<base>-2`,
/// `<base>-3`, and so on. Unique base names are reserved first so a suffixed name
/// never takes one.
pub(crate) fn assign_names(candidates: Vec<Candidate>) -> Vec<JdkInstallation> {
    let bases: Vec<String> = candidates.iter().map(Candidate::base_name).collect();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for base in &bases {
        *counts.entry(base.as_str()).or_default() += 1;
    }

    let mut used: HashSet<String> = bases
        .iter()
        .filter(|b| counts[b.as_str()] == 1)
        .cloned()
        .collect();

    let mut installations = Vec::with_capacity(candidates.len());
    for (candidate, base) in candidates.into_iter().zip(&bases) {
        if counts[base.as_str()] == 1 {
            installations.push(candidate.into_installation(base.clone()));
            continue;
        }

        let preferred = match candidate.version.build() {
            Some(build) => format!("{base}+{build}"),
            None => base.clone(),
        };
        let name = if used.insert(preferred.clone()) {
            preferred
        } else {
            let name = (2..)
                .map(|n| format!("{base}-{n}"))
                .find(|n| !used.contains(n))
                .unwrap_or_else(|| base.clone());
            used.insert(name.clone());
            name
        };
        tracing::debug!(%base, %name, home = %candidate.home.display(), "renamed colliding installation");
        installations.push(candidate.into_installation(name));
    }
    installations
}
