use crate::{JenvHome, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// User settings: defaults, then `<root>/config.toml`, then `JENV_*` variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run `java -XshowSettings:properties` when a home has no `release` file.
    pub probe_launcher: bool,
    pub probe_timeout_ms: u64,
    /// Program the generated shims call back into. Defaults to the running binary.
    pub shim_launcher: Option<PathBuf>,
    /// Register `JAVA_HOME`/`JDK_HOME` homes during a scan.
    pub include_java_home: bool,
    /// Scan the built-in well-known locations.
    pub default_search_paths: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            probe_launcher: true,
            probe_timeout_ms: 5000,
            shim_launcher: None,
            include_java_home: true,
            default_search_paths: true,
        }
    }
}

const ENV_KEYS: [&str; 3] = ["probe_launcher", "probe_timeout_ms", "shim_launcher"];

impl Settings {
    pub fn figment(home: &JenvHome) -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(home.config_file()))
            .merge(Env::prefixed("JENV_").only(&ENV_KEYS))
    }

    pub fn load(home: &JenvHome) -> Result<Self> {
        let settings: Settings = Self::figment(home).extract().map_err(Box::new)?;
        tracing::debug!(?settings, "loaded settings");
        Ok(settings)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}
