use crate::Vendor;
use jenv_platform::exe;
use jenv_version::JavaVersion;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Where an installation was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// A built-in search location (`/usr/lib/jvm`, SDKMAN, `<root>/versions`, …).
    WellKnown,
    /// A directory the user added with `scan --add-path`.
    CustomPath,
    /// A home given directly: `JAVA_HOME`, `JDK_HOME`, or a path selector.
    Manual,
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Provenance::WellKnown => "well-known",
            Provenance::CustomPath => "custom-path",
            Provenance::Manual => "manual",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdkInstallation {
    /// Unique within one registry snapshot.
    pub name: String,
    /// Absolute, canonicalized home directory.
    pub home: PathBuf,
    pub vendor: Vendor,
    pub version: JavaVersion,
    pub provenance: Provenance,
}

impl JdkInstallation {
    pub fn bin_dir(&self) -> PathBuf {
        self.home.join("bin")
    }

    /// `<home>/bin/<tool>` with the platform's executable suffix.
    pub fn tool_path(&self, tool: &str) -> PathBuf {
        self.bin_dir().join(exe::exe_name(tool))
    }

    pub fn launcher(&self) -> PathBuf {
        self.tool_path(exe::JAVA)
    }

    /// Whether the home still holds its launcher. Registry entries can go stale
    /// between scans.
    pub fn is_present(&self) -> bool {
        has_launcher(&self.home)
    }

    /// Tool names in `<home>/bin`, read from disk.
    pub fn tool_names(&self) -> std::io::Result<BTreeSet<String>> {
        let mut names = BTreeSet::new();
        for entry in std::fs::read_dir(self.bin_dir())? {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().and_then(exe::tool_name) else {
                continue;
            };
            if jenv_fs::is_executable(entry.path()) {
                names.insert(name);
            }
        }
        Ok(names)
    }
}

pub(crate) fn has_launcher(home: &Path) -> bool {
    home.join("bin").join(exe::java_launcher()).is_file()
}
