//! Version and vendor metadata sources for a JDK home.

use crate::{Error, Result};
use jenv_platform::command::Command;
use jenv_version::JavaVersion;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

static DIR_VERSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?<lead>jdk|java)?[-_]?(?<version>[0-9]+(?:\.[0-9]+)*(?:_[0-9]+)?(?:\+[0-9]+)?)")
        .unwrap()
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Metadata {
    pub version: Option<JavaVersion>,
    pub vendor: Option<String>,
}

/// Parse a JDK `release` file (`KEY="value"` lines).
pub(crate) fn read_release_file(home: &Path) -> Option<Metadata> {
    let bytes = jenv_fs::read_optional(home.join("release")).ok()??;
    let text = String::from_utf8_lossy(&bytes);
    let fields: HashMap<&str, &str> = text
        .lines()
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.trim(), v.trim().trim_matches('"')))
        .collect();

    let version = ["JAVA_RUNTIME_VERSION", "JAVA_VERSION"]
        .iter()
        .filter_map(|key| fields.get(key))
        .find_map(|v| JavaVersion::parse(v).ok());
    let vendor = ["IMPLEMENTOR", "IMPLEMENTOR_VERSION"]
        .iter()
        .filter_map(|key| fields.get(key))
        .find(|v| !v.is_empty() && **v != "N/A")
        .map(|v| v.to_string());

    Some(Metadata { version, vendor })
}

/// Run `java -XshowSettings:properties -version` and read its property dump.
pub(crate) fn probe_launcher(home: &Path, launcher: &Path, timeout: Duration) -> Result<Metadata> {
    let captured = Command::new(launcher)
        .args(["-XshowSettings:properties", "-version"])
        .env_remove("JAVA_TOOL_OPTIONS")
        .env_remove("_JAVA_OPTIONS")
        .capture_with_timeout(timeout)
        .map_err(|source| Error::Probe {
            path: home.to_path_buf(),
            source,
        })?;

    let text = String::from_utf8_lossy(&captured.stderr);
    let metadata = parse_properties(&text);
    if metadata.version.is_none() {
        return Err(Error::ProbeOutput {
            path: home.to_path_buf(),
        });
    }
    Ok(metadata)
}

pub(crate) fn parse_properties(text: &str) -> Metadata {
    let property = |name: &str| {
        text.lines().find_map(|line| {
            let (key, value) = line.split_once('=')?;
            (key.trim() == name).then(|| value.trim())
        })
    };

    let version = ["java.runtime.version", "java.version"]
        .iter()
        .filter_map(|key| property(key))
        .find_map(|v| JavaVersion::parse(v).ok());
    let vendor = property("java.vendor")
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    Metadata { version, vendor }
}

/// Recover a version from directory-naming conventions.
///
/// A number directly after `jdk`/`java` wins over other numbers in the name, so
/// `zulu11.62.17-ca-jdk11.0.18` yields `11.0.18`.
pub(crate) fn version_from_dir_name(name: &str) -> Option<JavaVersion> {
    let mut fallback = None;
    for caps in DIR_VERSION_REGEX.captures_iter(name) {
        let Ok(version) = JavaVersion::parse(&caps["version"]) else {
            continue;
        };
        if caps.name("lead").is_some() {
            return Some(version);
        }
        fallback.get_or_insert(version);
    }
    fallback
}
