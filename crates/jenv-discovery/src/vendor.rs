use std::path::Path;

/// JDK distributions jenv can tell apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vendor {
    #[default]
    Unknown,
    Temurin,
    OpenJdk,
    Oracle,
    Corretto,
    Zulu,
    GraalVm,
}

impl Vendor {
    /// Lowercase identifier used as the canonical name prefix and in vendor queries.
    pub fn slug(self) -> &'static str {
        match self {
            Vendor::Unknown => "unknown",
            Vendor::Temurin => "temurin",
            Vendor::OpenJdk => "openjdk",
            Vendor::Oracle => "oracle",
            Vendor::Corretto => "corretto",
            Vendor::Zulu => "zulu",
            Vendor::GraalVm => "graalvm",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Vendor::Unknown => "Unknown",
            Vendor::Temurin => "Eclipse Temurin",
            Vendor::OpenJdk => "OpenJDK",
            Vendor::Oracle => "Oracle",
            Vendor::Corretto => "Amazon Corretto",
            Vendor::Zulu => "Azul Zulu",
            Vendor::GraalVm => "GraalVM",
        }
    }

    /// Detect a vendor from an `IMPLEMENTOR` or `java.vendor` value.
    pub fn from_metadata(value: &str) -> Option<Self> {
        let lower = value.to_ascii_lowercase();
        let has = |needle: &str| lower.contains(needle);

        if has("adoptium") || has("temurin") {
            Some(Vendor::Temurin)
        } else if has("amazon") || has("corretto") {
            Some(Vendor::Corretto)
        } else if has("azul") || has("zulu") {
            Some(Vendor::Zulu)
        } else if has("graalvm") {
            Some(Vendor::GraalVm)
        } else if has("oracle") {
            Some(Vendor::Oracle)
        } else {
            None
        }
    }

    /// Detect a vendor from the installation's directory layout.
    ///
    /// Looks at the home directory's name and its parent's name, including SDKMAN
    /// identifier suffixes (`17.0.9-tem`, `21.0.1-amzn`).
    pub fn from_path(home: &Path) -> Self {
        let dir = install_dir_name(home).to_ascii_lowercase();
        let parent = install_dir(home)
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        let has = |needle: &str| dir.contains(needle) || parent.contains(needle);

        if has("temurin") || has("adoptium") || dir.ends_with("-tem") {
            Vendor::Temurin
        } else if has("corretto") || dir.ends_with("-amzn") {
            Vendor::Corretto
        } else if has("zulu") {
            Vendor::Zulu
        } else if has("graalvm") || dir.ends_with("-graal") || dir.ends_with("-graalce") {
            Vendor::GraalVm
        } else if has("openjdk") || dir.ends_with("-open") {
            Vendor::OpenJdk
        } else if has("oracle") || dir.starts_with("jdk-") {
            Vendor::Oracle
        } else if dir.starts_with("jdk") || dir.starts_with("java-") {
            Vendor::OpenJdk
        } else {
            Vendor::Unknown
        }
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// The directory that names an installation.
///
/// For macOS bundles (`temurin-17.jdk/Contents/Home`) this is the bundle directory.
pub(crate) fn install_dir_name(home: &Path) -> String {
    install_dir(home)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn install_dir(home: &Path) -> &Path {
    home.ends_with("Contents/Home")
        .then(|| home.parent().and_then(Path::parent))
        .flatten()
        .unwrap_or(home)
}
