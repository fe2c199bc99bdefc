//! Prefix queries with an optional vendor qualifier (`17`, `temurin-17.0`).

use crate::{JavaVersion, Result, VersionError, VersionPrefix};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    /// Lowercase vendor slug, compared against the installation's vendor slug.
    pub vendor: Option<String>,
    pub prefix: VersionPrefix,
}

impl Query {
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(prefix) = VersionPrefix::parse(trimmed) {
            return Ok(Self {
                vendor: None,
                prefix,
            });
        }

        let (vendor, rest) = trimmed
            .rsplit_once('-')
            .ok_or_else(|| VersionError::InvalidQuery(s.to_string()))?;
        if vendor.is_empty() || !vendor.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(VersionError::InvalidQuery(s.to_string()));
        }
        let prefix =
            VersionPrefix::parse(rest).map_err(|_| VersionError::InvalidQuery(s.to_string()))?;

        Ok(Self {
            vendor: Some(vendor.to_ascii_lowercase()),
            prefix,
        })
    }

    pub fn matches(&self, vendor: &str, version: &JavaVersion) -> bool {
        self.vendor.as_deref().is_none_or(|v| v == vendor) && self.prefix.matches(version)
    }
}

impl std::str::FromStr for Query {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Query::parse(s)
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(vendor) = &self.vendor {
            write!(f, "{}-", vendor)?;
        }
        write!(f, "{}", self.prefix)
    }
}
