use anyhow::{Context as _, Result};
use jenv_discovery::{
    JdkInstallation, Provenance, Registry, ScanOptions, ScanReport, Scanner, SearchPaths,
    home_of, inspect_home,
};
use jenv_platform::env::EnvSnapshot;
use jenv_resolve::Resolver;
use jenv_state::{CustomPaths, JenvHome, Settings, VersionStore};
use std::path::{Path, PathBuf};

/// Everything a command reads from the outside world, captured once at startup.
#[derive(Debug, Clone)]
pub struct Context {
    pub cwd: PathBuf,
    pub env: EnvSnapshot,
    pub home: JenvHome,
    pub settings: Settings,
    pub store: VersionStore,
}

impl Context {
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Self::new(cwd, EnvSnapshot::from_process())
    }

    pub fn new(cwd: PathBuf, env: EnvSnapshot) -> Result<Self> {
        let home = JenvHome::from_env(&env)?;
        let settings = Settings::load(&home)
            .with_context(|| format!("failed to load {}", home.config_file().display()))?;
        let store = VersionStore::new(home.clone());
        Ok(Self {
            cwd,
            env,
            home,
            settings,
            store,
        })
    }

    pub fn custom_paths(&self) -> CustomPaths {
        CustomPaths::new(&self.home)
    }

    /// Built-in locations, then `<root>/paths`, then `JAVA_HOME`/`JDK_HOME`.
    pub fn search_paths(&self) -> Result<SearchPaths> {
        let mut paths = if self.settings.default_search_paths {
            SearchPaths::new().with_defaults(self.home.root(), &self.env)
        } else {
            let mut paths = SearchPaths::new();
            paths.push(self.home.versions_dir(), Provenance::WellKnown);
            paths
        };
        paths = paths.with_custom(self.custom_paths().list()?);
        if self.settings.include_java_home {
            paths = paths.with_java_home(&self.env);
        }
        Ok(paths)
    }

    /// Full scan for commands the user runs directly. Launchers may be run and
    /// every isolated failure is logged.
    pub fn scan(&self) -> Result<ScanReport> {
        let report = self.scan_with(ScanOptions {
            probe_launcher: self.settings.probe_launcher,
            probe_timeout: self.settings.probe_timeout(),
        })?;
        for warning in &report.warnings {
            tracing::warn!("{warning}");
        }
        Ok(report)
    }

    /// Scan on the shim path: no launcher is spawned and nothing is logged above
    /// debug, so the tool's stderr stays its own.
    pub fn dispatch_scan(&self) -> Result<ScanReport> {
        self.scan_with(ScanOptions {
            probe_launcher: false,
            ..ScanOptions::default()
        })
    }

    fn scan_with(&self, options: ScanOptions) -> Result<ScanReport> {
        Ok(Scanner::new(options).scan(&self.search_paths()?))
    }

    /// The installation `JAVA_HOME` points at, used when no scope holds a selector.
    pub fn system_default(&self, registry: &Registry) -> Option<JdkInstallation> {
        if !self.settings.include_java_home {
            return None;
        }
        let java_home = self.env.get_non_empty("JAVA_HOME")?;
        let home = home_of(Path::new(java_home))?;
        registry
            .find_by_home(&home)
            .cloned()
            .or_else(|| inspect_home(&home).ok())
    }

    pub fn resolver<'a>(&'a self, registry: &'a Registry) -> Resolver<'a> {
        Resolver::new(registry, &self.store).system_default(self.system_default(registry))
    }

    /// The program generated shims call back into.
    pub fn launcher(&self) -> Result<PathBuf> {
        match &self.settings.shim_launcher {
            Some(launcher) => Ok(launcher.clone()),
            None => std::env::current_exe().context("cannot locate the jenv executable"),
        }
    }

    /// `path` made absolute against the working directory.
    pub fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}
