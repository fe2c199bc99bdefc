use crate::JdkInstallation;
use crate::naming::{Candidate, assign_names};
use jenv_version::Query;
use std::collections::BTreeSet;
use std::path::Path;

/// An immutable snapshot of discovered installations.
///
/// Sorted by version descending, then canonical name ascending. Canonical names are
/// unique within one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    installations: Vec<JdkInstallation>,
}

impl Registry {
    pub(crate) fn from_candidates(candidates: Vec<Candidate>) -> Self {
        Self::sorted(assign_names(candidates))
    }

    fn sorted(mut installations: Vec<JdkInstallation>) -> Self {
        installations.sort_by(|a, b| b.version.cmp(&a.version).then_with(|| a.name.cmp(&b.name)));
        Self { installations }
    }

    /// Build a registry from already-named installations.
    ///
    /// Later entries whose name or home repeats an earlier one are dropped.
    pub fn from_installations(installations: impl IntoIterator<Item = JdkInstallation>) -> Self {
        let mut kept: Vec<JdkInstallation> = Vec::new();
        for installation in installations {
            if kept
                .iter()
                .any(|k| k.name == installation.name || k.home == installation.home)
            {
                tracing::debug!(name = %installation.name, "dropping duplicate installation");
                continue;
            }
            kept.push(installation);
        }
        Self::sorted(kept)
    }

    pub fn iter(&self) -> impl Iterator<Item = &JdkInstallation> {
        self.installations.iter()
    }

    pub fn len(&self) -> usize {
        self.installations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installations.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&JdkInstallation> {
        self.installations.iter().find(|i| i.name == name)
    }

    /// Find the installation whose home is `path`, comparing canonicalized paths.
    pub fn find_by_home(&self, path: &Path) -> Option<&JdkInstallation> {
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        self.installations
            .iter()
            .find(|i| i.home == canonical || i.home == path)
    }

    /// Every installation matching a version query, in registry order.
    pub fn matching(&self, query: &Query) -> Vec<&JdkInstallation> {
        self.installations
            .iter()
            .filter(|i| query.matches(i.vendor.slug(), &i.version))
            .collect()
    }

    /// Sorted union of tool names across all installations' `bin` directories.
    ///
    /// Unreadable `bin` directories are logged and skipped.
    pub fn tool_names(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        for installation in &self.installations {
            match installation.tool_names() {
                Ok(tools) => names.extend(tools),
                Err(e) => tracing::warn!(
                    name = %installation.name,
                    bin = %installation.bin_dir().display(),
                    "cannot list tools: {e}"
                ),
            }
        }
        names
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a JdkInstallation;
    type IntoIter = std::slice::Iter<'a, JdkInstallation>;

    fn into_iter(self) -> Self::IntoIter {
        self.installations.iter()
    }
}
