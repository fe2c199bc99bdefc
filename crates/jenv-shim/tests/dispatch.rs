use jenv_discovery::{Provenance, Registry, ScanOptions, Scanner, SearchPaths};
use jenv_platform::env::{EnvSnapshot, PathModifier};
use jenv_platform::exe::exe_name;
use jenv_resolve::{ResolveError, Resolver};
use jenv_shim::{DispatchError, Dispatcher, JdkResolver};
use jenv_state::{JenvHome, SHELL_VAR, VersionStore};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_tool(home: &Path, tool: &str) {
    let path = home.join("bin").join(exe_name(tool));
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "").unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
}

fn fake_jdk(parent: &Path, dir: &str, version: &str) -> PathBuf {
    let home = parent.join(dir);
    write_tool(&home, "java");
    write_tool(&home, "javac");
    std::fs::write(
        home.join("release"),
        format!("IMPLEMENTOR=\"Eclipse Adoptium\"\nJAVA_RUNTIME_VERSION=\"{version}\"\n"),
    )
    .unwrap();
    home
}

struct Fixture {
    dir: TempDir,
    registry: Registry,
    store: VersionStore,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let jdks = dir.path().join("jdks");
    fake_jdk(&jdks, "temurin-17", "17.0.9+9");
    fake_jdk(&jdks, "temurin-21", "21.0.1+12");

    let mut paths = SearchPaths::new();
    paths.push(&jdks, Provenance::WellKnown);
    let registry = Scanner::new(ScanOptions {
        probe_launcher: false,
        ..ScanOptions::default()
    })
    .scan(&paths)
    .registry;
    let store = VersionStore::new(JenvHome::new(dir.path().join("root")));
    Fixture {
        dir,
        registry,
        store,
    }
}

impl Fixture {
    fn prepare(&self, tool: &str, env: &EnvSnapshot) -> Result<jenv_shim::Launch, DispatchError> {
        let resolver = Resolver::new(&self.registry, &self.store);
        let cwd = self.dir.path();
        Dispatcher::new(JdkResolver::new(resolver, cwd, env)).prepare(
            tool,
            vec![OsString::from("-version")],
            env,
        )
    }
}

#[test]
fn test_prepare_sets_java_home_and_path() {
    let f = fixture();
    let mut env = EnvSnapshot::new().with(SHELL_VAR, "21");
    env.set_path(std::env::join_paths(["/usr/bin", "/bin"]).unwrap());

    let launch = f.prepare("javac", &env).unwrap();
    let home = &launch.installation.home;
    assert_eq!(launch.installation.name, "temurin-21.0.1");
    assert_eq!(launch.program, home.join("bin").join(exe_name("javac")));
    assert_eq!(launch.args, [OsString::from("-version")]);
    assert_eq!(launch.env.get("JAVA_HOME"), Some(home.as_os_str()));

    let path = PathModifier::new(launch.env.path());
    assert_eq!(path.entries()[0], home.join("bin"));
    assert!(path.contains(Path::new("/usr/bin")));
    assert_eq!(launch.env.get(SHELL_VAR), Some(std::ffi::OsStr::new("21")));
}

#[test]
fn test_missing_tool_is_missing_executable() {
    let f = fixture();
    let env = EnvSnapshot::new().with(SHELL_VAR, "17");
    let err = f.prepare("jshell", &env).unwrap_err();
    assert!(matches!(err, DispatchError::MissingExecutable { .. }));
    assert_eq!(err.exit_code(), 13);

    let err = f.prepare("../bin/java", &env).unwrap_err();
    assert_eq!(err.exit_code(), 13);
}

#[test]
fn test_stale_shell_selector_fails_without_fallback() {
    let f = fixture();
    f.store.set_global("21").unwrap();
    let stale = f.dir.path().join("removed-jdk");
    fake_jdk(f.dir.path(), "removed-jdk", "11.0.21");
    let env = EnvSnapshot::new().with(SHELL_VAR, &stale);
    assert!(f.prepare("java", &env).is_ok());

    std::fs::remove_dir_all(&stale).unwrap();
    let err = f.prepare("java", &env).unwrap_err();
    assert!(
        matches!(err, DispatchError::Resolve(ResolveError::InvalidSelector { .. })),
        "{err:?}"
    );
    assert_eq!(err.exit_code(), 12);
}

#[test]
fn test_no_version_configured() {
    let f = fixture();
    let err = f.prepare("java", &EnvSnapshot::new()).unwrap_err();
    assert_eq!(err.exit_code(), 15);
}

#[test]
fn test_unknown_selector_is_invalid() {
    let f = fixture();
    let err = f
        .prepare("java", &EnvSnapshot::new().with(SHELL_VAR, "temurin"))
        .unwrap_err();
    assert_eq!(err.exit_code(), 12);

    f.store.set_global("temurin-17.0.9").unwrap();
    let launch = f.prepare("java", &EnvSnapshot::new()).unwrap();
    assert_eq!(launch.installation.name, "temurin-17.0.9");
}

#[test]
fn test_closure_resolver() {
    let f = fixture();
    let registry = &f.registry;
    let resolver = |_tool: &str| {
        Err::<jenv_resolve::Resolution, _>(ResolveError::NotFound {
            value: registry.len().to_string(),
        })
    };
    let err = Dispatcher::new(resolver)
        .prepare("java", Vec::new(), &EnvSnapshot::new())
        .unwrap_err();
    assert_eq!(err.exit_code(), 10);
}

#[test]
fn test_exec_failure_is_126() {
    let f = fixture();
    let env = EnvSnapshot::new().with(SHELL_VAR, "17");
    let mut launch = f.prepare("java", &env).unwrap();
    launch.program = f.dir.path().join("no-such-program");
    let err = launch.exec().unwrap_err();
    assert!(matches!(err, DispatchError::Exec { .. }));
    assert_eq!(err.exit_code(), 126);
}
