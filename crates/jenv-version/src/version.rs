//! Fully specified Java release versions.

use crate::{Result, VersionError, normalize_legacy};
use once_cell::sync::Lazy;
use regex::Regex;
use semver::{BuildMetadata, Prerelease, Version};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?<major>[0-9]+)(?:\.(?<minor>[0-9]+))?(?:\.(?<patch>[0-9]+))?(?:\.[0-9]+)*(?:_(?<update>[0-9]+))?$").unwrap()
});

static LEGACY_BUILD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^b(?<build>[0-9]+)$").unwrap());

const PRE_RELEASE_TAGS: &[&str] = &["ea", "internal", "alpha", "beta", "rc"];

/// A Java release version: `major.minor.patch`, optional pre-release tag, optional build.
///
/// Stored as a [`semver::Version`] with the build number kept in the build metadata.
/// Ordering compares the numeric triple, then pre-release (a pre-release sorts before
/// its release), then the build number numerically.
#[derive(Debug, Clone)]
pub struct JavaVersion(Version);

impl JavaVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(Version::new(major, minor, patch))
    }

    pub fn with_build(mut self, build: u64) -> Self {
        self.0.build = BuildMetadata::new(&build.to_string()).unwrap_or(BuildMetadata::EMPTY);
        self
    }

    pub fn with_pre(mut self, pre: &str) -> Self {
        self.0.pre = Prerelease::new(pre).unwrap_or(Prerelease::EMPTY);
        self
    }

    /// Parse a version as reported by `java.runtime.version`, a `release` file,
    /// or a directory name fragment.
    ///
    /// Accepts `17`, `17.0.9+9`, `17.0.9+9-LTS`, `21-ea+35`, `11.0.2.1`,
    /// `1.8.0_292` and `1.8.0_292-b10`.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_matches('"');
        let invalid = || VersionError::InvalidVersion(s.to_string());

        let (head, build_part) = trimmed
            .split_once('+')
            .map(|(h, b)| (h, Some(b)))
            .unwrap_or((trimmed, None));
        let (numeric, suffix) = head
            .split_once('-')
            .map(|(n, s)| (n, Some(s)))
            .unwrap_or((head, None));

        let caps = NUMERIC_REGEX.captures(numeric).ok_or_else(invalid)?;
        let number = |name: &str| -> Result<Option<u64>> {
            caps.name(name)
                .map(|m| m.as_str().parse::<u64>().map_err(|_| invalid()))
                .transpose()
        };

        let (major, minor, patch) = normalize_legacy(
            number("major")?.ok_or_else(invalid)?,
            number("minor")?,
            number("patch")?,
            number("update")?,
        );

        let mut version = Self::new(major, minor.unwrap_or(0), patch.unwrap_or(0));
        let mut build = build_part.and_then(leading_number);

        if let Some(suffix) = suffix {
            if let Some(caps) = LEGACY_BUILD_REGEX.captures(suffix) {
                build = build.or_else(|| caps["build"].parse().ok());
            } else {
                let lower = suffix.to_ascii_lowercase();
                if let Some(tag) = PRE_RELEASE_TAGS.iter().find(|t| lower.starts_with(**t)) {
                    version = version.with_pre(tag);
                }
            }
        }

        if let Some(build) = build {
            version = version.with_build(build);
        }

        Ok(version)
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    pub fn pre(&self) -> Option<&str> {
        (!self.0.pre.is_empty()).then(|| self.0.pre.as_str())
    }

    pub fn build(&self) -> Option<u64> {
        self.0.build.as_str().parse().ok()
    }

    /// `major.minor.patch` without pre-release or build, as used in canonical names.
    pub fn short(&self) -> String {
        format!("{}.{}.{}", self.0.major, self.0.minor, self.0.patch)
    }
}

fn leading_number(s: &str) -> Option<u64> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

impl Ord for JavaVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.0.major, self.0.minor, self.0.patch)
            .cmp(&(other.0.major, other.0.minor, other.0.patch))
            .then_with(|| self.0.pre.cmp(&other.0.pre))
            .then_with(|| self.build().cmp(&other.build()))
    }
}

impl PartialOrd for JavaVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for JavaVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for JavaVersion {}

impl Hash for JavaVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.0.major, self.0.minor, self.0.patch).hash(state);
        self.0.pre.as_str().hash(state);
        self.build().hash(state);
    }
}

impl std::str::FromStr for JavaVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        JavaVersion::parse(s)
    }
}

impl std::fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short())?;
        if let Some(pre) = self.pre() {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = self.build() {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl serde::Serialize for JavaVersion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for JavaVersion {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        JavaVersion::parse(&s).map_err(serde::de::Error::custom)
    }
}
