use crate::{ResolveError, Result};
use jenv_discovery::{JdkInstallation, Registry, home_of, inspect_home};
use jenv_version::Query;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Match a selector value against the registry.
///
/// Tried in order: exact canonical name, a filesystem path to a JDK home, then a
/// version query (`17`, `17.0.9`, `temurin-17`). Relative paths are taken relative
/// to `base_dir`. Homes outside the registry are inspected without spawning the
/// launcher.
pub fn match_value(registry: &Registry, value: &str, base_dir: &Path) -> Result<JdkInstallation> {
    if let Some(installation) = registry.get(value) {
        debug!(value, "matched canonical name");
        return Ok(installation.clone());
    }

    if let Some(path) = as_path(value, base_dir) {
        if let Some(home) = home_of(&path) {
            if let Some(installation) = registry.find_by_home(&home) {
                debug!(value, name = %installation.name, "matched registered home");
                return Ok(installation.clone());
            }
            if let Ok(installation) = inspect_home(&home) {
                debug!(value, name = %installation.name, "matched unregistered home");
                return Ok(installation);
            }
        }
    }

    let Ok(query) = Query::parse(value) else {
        return Err(ResolveError::NotFound {
            value: value.to_string(),
        });
    };
    match registry.matching(&query).as_slice() {
        [] => Err(ResolveError::NotFound {
            value: value.to_string(),
        }),
        [only] => {
            debug!(value, name = %only.name, "matched version query");
            Ok((*only).clone())
        }
        many => Err(ResolveError::Ambiguous {
            value: value.to_string(),
            candidates: many.iter().map(|i| i.name.clone()).collect(),
        }),
    }
}

fn as_path(value: &str, base_dir: &Path) -> Option<PathBuf> {
    let path = Path::new(value);
    let looks_like_path = path.is_absolute()
        || value.starts_with('.')
        || value.contains('/')
        || value.contains(std::path::MAIN_SEPARATOR);
    if !looks_like_path {
        return None;
    }
    Some(if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    })
}
