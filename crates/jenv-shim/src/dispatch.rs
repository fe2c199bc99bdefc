use crate::{DispatchError, TargetResolver};
use jenv_discovery::JdkInstallation;
use jenv_platform::env::{EnvSnapshot, PathModifier};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

type Result<T> = std::result::Result<T, DispatchError>;

/// Everything needed to start the real tool. Building one has no side effects.
#[derive(Debug, Clone)]
pub struct Launch {
    pub installation: JdkInstallation,
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub env: EnvSnapshot,
}

impl Launch {
    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).env_clear().envs(self.env.iter());
        command
    }

    /// Replace the current process with the target.
    ///
    /// Only returns on failure.
    #[cfg(unix)]
    pub fn exec(self) -> Result<i32> {
        use std::os::unix::process::CommandExt;

        let source = self.command().exec();
        Err(DispatchError::Exec {
            program: self.program,
            source,
        })
    }

    /// Run the target to completion and return its exit code.
    ///
    /// Windows cannot replace a process image, so the child is waited on instead.
    #[cfg(not(unix))]
    pub fn exec(self) -> Result<i32> {
        let status = self.command().status().map_err(|source| DispatchError::Exec {
            program: self.program.clone(),
            source,
        })?;
        Ok(status.code().unwrap_or(1))
    }
}

pub struct Dispatcher<R> {
    resolver: R,
}

impl<R: TargetResolver> Dispatcher<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Resolve the installation for `tool` and plan its launch.
    ///
    /// The child environment gets `JAVA_HOME=<home>` and `<home>/bin` in front of
    /// `PATH`. Any failure is returned before anything is executed.
    pub fn prepare(&self, tool: &str, args: Vec<OsString>, env: &EnvSnapshot) -> Result<Launch> {
        let resolution = self.resolver.resolve(tool)?;
        let installation = resolution.installation;

        let missing = || DispatchError::MissingExecutable {
            tool: tool.to_string(),
            home: installation.home.clone(),
        };
        if tool.is_empty() || tool.contains(['/', '\\']) || tool == "." || tool == ".." {
            return Err(missing());
        }
        let program = installation.tool_path(tool);
        if !jenv_fs::is_executable(&program) {
            return Err(missing());
        }

        let mut child_env = env.clone();
        child_env.set("JAVA_HOME", &installation.home);
        let path = PathModifier::new(env.path())
            .prepend(installation.bin_dir())
            .build()?;
        child_env.set_path(path);

        tracing::debug!(program = %program.display(), "prepared launch");
        Ok(Launch {
            installation,
            program,
            args,
            env: child_env,
        })
    }
}
