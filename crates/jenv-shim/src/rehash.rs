use crate::RehashError;
use jenv_discovery::Registry;
#[cfg(not(windows))]
use jenv_platform::shell;
use jenv_fs::{
    PermissionMode, WriteOptions, WriteOutcome, read_optional, remove_if_exists, write_if_changed,
};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, RehashError>;

/// Marks files jenv generated. Only marked files are ever removed from the shim
/// directory.
pub const SHIM_MARKER: &str = "jenv shim: generated by `jenv rehash`, do not edit";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RehashReport {
    pub created: Vec<String>,
    pub updated: Vec<String>,
    pub unchanged: Vec<String>,
    pub removed: Vec<String>,
}

impl RehashReport {
    pub fn is_noop(&self) -> bool {
        self.created.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

/// Writes one dispatch shim per tool name into a directory.
#[derive(Debug, Clone)]
pub struct ShimGenerator {
    dir: PathBuf,
    launcher: PathBuf,
}

impl ShimGenerator {
    /// `launcher` is the program shims call back into with `exec <tool>`.
    pub fn new(dir: impl Into<PathBuf>, launcher: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            launcher: launcher.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn shim_path(&self, tool: &str) -> PathBuf {
        self.dir.join(shim_file_name(tool))
    }

    #[cfg(not(windows))]
    pub fn render(&self, tool: &str) -> String {
        format!(
            "#!/bin/sh\n# {SHIM_MARKER}\nexec {} exec {} \"$@\"\n",
            shell::quote(&self.launcher.to_string_lossy()),
            shell::quote(tool)
        )
    }

    #[cfg(windows)]
    pub fn render(&self, tool: &str) -> String {
        format!(
            "@echo off\r\nrem {SHIM_MARKER}\r\n\"{}\" exec {} %*\r\nexit /b %ERRORLEVEL%\r\n",
            self.launcher.display(),
            tool
        )
    }

    pub fn rehash_registry(&self, registry: &Registry) -> Result<RehashReport> {
        self.rehash(&registry.tool_names())
    }

    /// Bring the shim directory in line with `tools`.
    ///
    /// Shims whose content already matches are left untouched, so running this twice
    /// without changes produces byte-identical files.
    pub fn rehash(&self, tools: &BTreeSet<String>) -> Result<RehashReport> {
        let mut report = RehashReport::default();
        let options = WriteOptions::new().permissions(PermissionMode::Executable);

        for tool in tools {
            let content = self.render(tool);
            let outcome = write_if_changed(self.shim_path(tool), content.as_bytes(), options)
                .map_err(RehashError::Write)?;
            let bucket = match outcome {
                WriteOutcome::Created => &mut report.created,
                WriteOutcome::Updated => &mut report.updated,
                WriteOutcome::Unchanged => &mut report.unchanged,
            };
            bucket.push(tool.clone());
        }

        for (tool, path) in self.generated_shims()? {
            if tools.contains(&tool) {
                continue;
            }
            if remove_if_exists(&path).map_err(RehashError::Remove)? {
                report.removed.push(tool);
            }
        }

        tracing::debug!(
            created = report.created.len(),
            updated = report.updated.len(),
            unchanged = report.unchanged.len(),
            removed = report.removed.len(),
            "rehash complete"
        );
        Ok(report)
    }

    /// Shims in the directory that carry the marker, keyed by tool name.
    fn generated_shims(&self) -> Result<BTreeMap<String, PathBuf>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(RehashError::ReadDir {
                    path: self.dir.clone(),
                    source,
                });
            }
        };

        let mut shims = BTreeMap::new();
        for entry in entries {
            let entry = entry.map_err(|source| RehashError::ReadDir {
                path: self.dir.clone(),
                source,
            })?;
            let path = entry.path();
            let Some(tool) = entry.file_name().to_str().and_then(tool_from_file_name) else {
                continue;
            };
            if is_generated(&path) {
                shims.insert(tool, path);
            }
        }
        Ok(shims)
    }
}

fn is_generated(path: &Path) -> bool {
    match read_optional(path) {
        Ok(Some(bytes)) => String::from_utf8_lossy(&bytes).contains(SHIM_MARKER),
        _ => false,
    }
}

#[cfg(not(windows))]
fn shim_file_name(tool: &str) -> String {
    tool.to_string()
}

#[cfg(windows)]
fn shim_file_name(tool: &str) -> String {
    format!("{tool}.cmd")
}

#[cfg(not(windows))]
fn tool_from_file_name(name: &str) -> Option<String> {
    (!name.starts_with('.')).then(|| name.to_string())
}

#[cfg(windows)]
fn tool_from_file_name(name: &str) -> Option<String> {
    name.strip_suffix(".cmd").map(str::to_string)
}
