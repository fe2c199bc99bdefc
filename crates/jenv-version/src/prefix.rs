//! Partial versions used to select installed releases (`17`, `17.0`, `1.8`).

use crate::{JavaVersion, Result, VersionError, normalize_legacy};
use once_cell::sync::Lazy;
use regex::Regex;

static PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?<major>[0-9]+)(?:\.(?<minor>[0-9]+))?(?:\.(?<patch>[0-9]+))?(?:_(?<update>[0-9]+))?$").unwrap()
});

/// A partial version. Every component that is present must match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionPrefix {
    pub major: u64,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
    pub build: Option<u64>,
}

impl VersionPrefix {
    pub fn major(major: u64) -> Self {
        Self {
            major,
            minor: None,
            patch: None,
            build: None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = || VersionError::InvalidPrefix(s.to_string());

        let (parts, build) = trimmed
            .split_once('+')
            .map(|(c, b)| (c, Some(b)))
            .unwrap_or((trimmed, None));

        let caps = PREFIX_REGEX.captures(parts).ok_or_else(invalid)?;
        let number = |name: &str| -> Result<Option<u64>> {
            caps.name(name)
                .map(|m| m.as_str().parse::<u64>().map_err(|_| invalid()))
                .transpose()
        };

        let build = build
            .map(|b| b.parse::<u64>().map_err(|_| invalid()))
            .transpose()?;

        let (major, minor, patch) = normalize_legacy(
            number("major")?.ok_or_else(invalid)?,
            number("minor")?,
            number("patch")?,
            number("update")?,
        );

        if build.is_some() && patch.is_none() {
            return Err(invalid());
        }

        Ok(Self {
            major,
            minor,
            patch,
            build,
        })
    }

    /// Check if this prefix matches a full version.
    pub fn matches(&self, version: &JavaVersion) -> bool {
        self.major == version.major()
            && self.minor.is_none_or(|m| m == version.minor())
            && self.patch.is_none_or(|p| p == version.patch())
            && self.build.is_none_or(|b| Some(b) == version.build())
    }
}

impl std::str::FromStr for VersionPrefix {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        VersionPrefix::parse(s)
    }
}

impl std::fmt::Display for VersionPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{}", minor)?;
        }
        if let Some(patch) = self.patch {
            write!(f, ".{}", patch)?;
        }
        if let Some(build) = self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}
