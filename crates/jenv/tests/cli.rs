#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{Duration, Instant};
use tempfile::TempDir;

const CONFIG: &str = "default_search_paths = false\ninclude_java_home = false\nprobe_launcher = false\n";

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self::with_config(CONFIG)
    }

    fn with_config(config: &str) -> Self {
        let sandbox = Self {
            dir: tempfile::tempdir().unwrap(),
        };
        std::fs::create_dir_all(sandbox.root()).unwrap();
        std::fs::create_dir_all(sandbox.project().join("sub")).unwrap();
        std::fs::write(sandbox.root().join("config.toml"), config).unwrap();
        std::fs::write(
            sandbox.root().join("paths"),
            format!("# JDKs for tests\n{}\n", sandbox.jdks().display()),
        )
        .unwrap();
        sandbox
    }

    fn root(&self) -> PathBuf {
        self.dir.path().join("root")
    }

    fn jdks(&self) -> PathBuf {
        self.dir.path().join("jdks")
    }

    fn project(&self) -> PathBuf {
        self.dir.path().join("project")
    }

    /// A fake JDK whose `java` echoes `JAVA_HOME` and its arguments and whose `javac`
    /// exits with 3.
    fn jdk(&self, dir: &str, implementor: Option<&str>, version: &str) -> PathBuf {
        let home = self.jdks().join(dir);
        std::fs::create_dir_all(home.join("bin")).unwrap();
        let mut release = format!("JAVA_VERSION=\"{version}\"\n");
        if let Some(implementor) = implementor {
            release.push_str(&format!("IMPLEMENTOR=\"{implementor}\"\n"));
        }
        std::fs::write(home.join("release"), release).unwrap();
        script(&home.join("bin/java"), "echo \"java $JAVA_HOME $*\"");
        script(&home.join("bin/javac"), "exit 3");
        home.canonicalize().unwrap()
    }

    fn standard(&self) -> (PathBuf, PathBuf) {
        let temurin = self.jdk("temurin-17", Some("Eclipse Adoptium"), "17.0.9+9");
        let corretto = self.jdk("corretto-11", Some("Amazon.com Inc."), "11.0.21+9");
        (temurin, corretto)
    }

    fn jenv(&self, args: &[&str]) -> Output {
        self.jenv_with(&self.project(), args, &[])
    }

    fn jenv_with(&self, cwd: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
        self.command(env!("CARGO_BIN_EXE_jenv"), cwd, env)
            .args(args)
            .output()
            .unwrap()
    }

    fn command(&self, program: impl AsRef<Path>, cwd: &Path, env: &[(&str, &str)]) -> Command {
        let mut command = Command::new(program.as_ref());
        command
            .current_dir(cwd)
            .env_clear()
            .env("JENV_DIR", self.root())
            .env("PATH", "/usr/bin:/bin")
            .envs(env.iter().copied());
        command
    }
}

fn script(path: &Path, body: &str) {
    std::fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_versions_lists_installations() {
    let sandbox = Sandbox::new();
    sandbox.standard();

    let output = sandbox.jenv(&["versions"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("temurin-17.0.9"), "{out}");
    assert!(out.contains("corretto-11.0.21"), "{out}");

    let output = sandbox.jenv(&["list", "--verbose"]);
    assert!(stdout(&output).contains("custom-path"));
}

#[test]
fn test_global_persists_canonical_name() {
    let sandbox = Sandbox::new();
    sandbox.standard();

    let output = sandbox.jenv(&["global", "17"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let global = std::fs::read_to_string(sandbox.root().join("version")).unwrap();
    assert_eq!(global.trim(), "temurin-17.0.9");

    let output = sandbox.jenv(&["global"]);
    assert_eq!(stdout(&output).trim(), "temurin-17.0.9");

    let output = sandbox.jenv(&["version"]);
    assert!(
        stdout(&output).starts_with("temurin-17.0.9 (set by global"),
        "{}",
        stdout(&output)
    );
}

#[test]
fn test_ambiguous_value_is_rejected_at_set_time() {
    let sandbox = Sandbox::new();
    sandbox.standard();
    sandbox.jdk("openjdk-17", None, "17.0.2");

    let output = sandbox.jenv(&["global", "17"]);
    assert_eq!(output.status.code(), Some(11));
    let err = stderr(&output);
    assert!(err.contains("temurin-17.0.9") && err.contains("openjdk-17.0.2"), "{err}");
    assert!(!sandbox.root().join("version").exists());

    let output = sandbox.jenv(&["global", "17.0.9"]);
    assert!(output.status.success());
}

#[test]
fn test_unknown_value_is_not_found() {
    let sandbox = Sandbox::new();
    sandbox.standard();
    let output = sandbox.jenv(&["local", "21"]);
    assert_eq!(output.status.code(), Some(10));
    assert!(!sandbox.project().join(".jenv-version").exists());
}

#[test]
fn test_shell_then_local_then_global() {
    let sandbox = Sandbox::new();
    sandbox.standard();
    let sub = sandbox.project().join("sub");

    assert!(sandbox.jenv(&["global", "11"]).status.success());
    let output = sandbox.jenv_with(&sub, &["version"], &[]);
    assert!(stdout(&output).starts_with("corretto-11.0.21"));

    assert!(sandbox.jenv(&["local", "temurin-17"]).status.success());
    let output = sandbox.jenv_with(&sub, &["version"], &[]);
    assert!(stdout(&output).starts_with("temurin-17.0.9 (set by local"));

    let output = sandbox.jenv_with(&sub, &["version"], &[("JENV_VERSION", "11")]);
    assert!(stdout(&output).starts_with("corretto-11.0.21 (set by shell"));

    assert!(sandbox.jenv(&["local", "--unset"]).status.success());
    let output = sandbox.jenv_with(&sub, &["version"], &[]);
    assert!(stdout(&output).starts_with("corretto-11.0.21 (set by global"));
}

#[test]
fn test_shell_prints_shell_commands() {
    let sandbox = Sandbox::new();
    sandbox.standard();

    let output = sandbox.jenv(&["shell", "11"]);
    assert_eq!(stdout(&output), "export JENV_VERSION='corretto-11.0.21'\n");

    let output = sandbox.jenv(&["shell", "--unset"]);
    assert_eq!(stdout(&output), "unset JENV_VERSION\n");

    let output = sandbox.jenv(&["shell"]);
    assert!(!output.status.success());
}

#[test]
fn test_home_outside_registry_persists_path() {
    let sandbox = Sandbox::new();
    sandbox.standard();
    let outside = sandbox.dir.path().join("elsewhere/jdk-21");
    std::fs::create_dir_all(outside.join("bin")).unwrap();
    std::fs::write(outside.join("release"), "JAVA_VERSION=\"21.0.1\"\n").unwrap();
    script(&outside.join("bin/java"), "true");

    let output = sandbox.jenv(&["local", "../elsewhere/jdk-21"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let local = std::fs::read_to_string(sandbox.project().join(".jenv-version")).unwrap();
    assert_eq!(Path::new(local.trim()), outside.canonicalize().unwrap());
}

#[test]
fn test_exec_runs_selected_tool() {
    let sandbox = Sandbox::new();
    let (temurin, _) = sandbox.standard();
    assert!(sandbox.jenv(&["global", "17"]).status.success());

    let output = sandbox.jenv(&["exec", "java", "-version", "--help"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        format!("java {} -version --help\n", temurin.display())
    );

    let output = sandbox.jenv(&["exec", "javac"]);
    assert_eq!(output.status.code(), Some(3));

    let output = sandbox.jenv(&["exec", "jshell"]);
    assert_eq!(output.status.code(), Some(13));
}

#[test]
fn test_exec_leaves_tool_stderr_alone() {
    let sandbox = Sandbox::new();
    let (temurin, _) = sandbox.standard();
    let missing = sandbox.dir.path().join("gone");
    let mut paths = std::fs::read_to_string(sandbox.root().join("paths")).unwrap();
    paths.push_str(&format!("{}\n", missing.display()));
    std::fs::write(sandbox.root().join("paths"), paths).unwrap();
    assert!(sandbox.jenv(&["global", "17"]).status.success());

    let output = sandbox.jenv(&["exec", "java", "-version"]);
    assert!(output.status.success());
    assert_eq!(stderr(&output), "");
    assert_eq!(stdout(&output), format!("java {} -version\n", temurin.display()));

    // Commands run by hand still report the broken path, without colour on a pipe.
    let output = sandbox.jenv(&["versions"]);
    let err = stderr(&output);
    assert!(err.contains(&missing.display().to_string()), "{err}");
    assert!(!err.contains('\x1b'), "{err:?}");
}

#[test]
fn test_exec_ignores_hung_jdks() {
    let sandbox = Sandbox::with_config(
        "default_search_paths = false\ninclude_java_home = false\n\
         probe_launcher = true\nprobe_timeout_ms = 3000\n",
    );
    let (temurin, _) = sandbox.standard();
    let hung = sandbox.jdks().join("custom-build");
    std::fs::create_dir_all(hung.join("bin")).unwrap();
    script(&hung.join("bin/java"), "exec sleep 30");

    let output = sandbox.jenv(&["global", "temurin-17.0.9"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let started = Instant::now();
    let output = sandbox.jenv(&["exec", "java", "-version"]);
    assert!(started.elapsed() < Duration::from_secs(2), "{:?}", started.elapsed());
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stderr(&output), "");
    assert_eq!(stdout(&output), format!("java {} -version\n", temurin.display()));
}

#[test]
fn test_exec_without_selection_runs_nothing() {
    let sandbox = Sandbox::new();
    sandbox.standard();

    let output = sandbox.jenv(&["exec", "java"]);
    assert_eq!(output.status.code(), Some(15));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_stale_shell_path_does_not_fall_back() {
    let sandbox = Sandbox::new();
    sandbox.standard();
    assert!(sandbox.jenv(&["global", "17"]).status.success());
    let gone = sandbox.dir.path().join("removed-jdk");

    let output = sandbox.jenv_with(
        &sandbox.project(),
        &["exec", "java"],
        &[("JENV_VERSION", gone.to_str().unwrap())],
    );
    assert_eq!(output.status.code(), Some(12));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_which() {
    let sandbox = Sandbox::new();
    let (_, corretto) = sandbox.standard();

    let output = sandbox.jenv_with(
        &sandbox.project(),
        &["which", "javac"],
        &[("JENV_VERSION", "11")],
    );
    assert_eq!(
        stdout(&output).trim(),
        corretto.join("bin/javac").display().to_string()
    );
}

#[test]
fn test_rehash_writes_working_shims() {
    let sandbox = Sandbox::new();
    let (temurin, _) = sandbox.standard();
    assert!(sandbox.jenv(&["global", "17"]).status.success());

    let output = sandbox.jenv(&["rehash"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let shims = sandbox.root().join("shims");
    assert!(shims.join("java").is_file());
    assert!(shims.join("javac").is_file());

    let output = sandbox.jenv(&["rehash"]);
    assert_eq!(stdout(&output), "2 shims up to date\n");

    let output = sandbox
        .command(shims.join("java"), &sandbox.project(), &[])
        .arg("-version")
        .output()
        .unwrap();
    assert_eq!(
        stdout(&output),
        format!("java {} -version\n", temurin.display())
    );

    let output = sandbox
        .command(shims.join("javac"), &sandbox.project(), &[])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_scan_failure_when_nothing_is_found() {
    let sandbox = Sandbox::new();
    let output = sandbox.jenv(&["scan"]);
    assert_eq!(output.status.code(), Some(14));
}

#[test]
fn test_scan_manages_custom_paths() {
    let sandbox = Sandbox::new();
    sandbox.standard();
    let extra = sandbox.dir.path().join("extra");
    std::fs::create_dir_all(&extra).unwrap();

    let output = sandbox.jenv(&["scan", "--add-path", extra.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("2 JDK(s) found"));

    let output = sandbox.jenv(&["scan", "--list-paths"]);
    let listed = stdout(&output);
    assert!(listed.contains(&format!("custom-path\t{}", extra.display())), "{listed}");

    let output = sandbox.jenv(&["scan", "--remove-path", extra.to_str().unwrap()]);
    assert!(output.status.success());
    let paths = std::fs::read_to_string(sandbox.root().join("paths")).unwrap();
    assert!(!paths.contains("extra"));
    assert!(paths.contains("jdks"));
}
