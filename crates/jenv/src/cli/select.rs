use crate::context::Context;
use anyhow::{Result, bail};
use clap::Args;
use jenv_discovery::{JdkInstallation, Registry, inspect_home};
use jenv_platform::shell;
use jenv_resolve::match_value;
use jenv_state::{LOCAL_FILE, SHELL_VAR, Scope};

#[derive(Debug, Clone, Args)]
pub struct SelectArg {
    /// Canonical name, version query (`17`, `temurin-21`) or path to a JDK home
    #[arg(conflicts_with = "unset")]
    value: Option<String>,
    /// Remove the selector at this scope
    #[arg(long)]
    unset: bool,
}

pub fn run(ctx: &Context, scope: Scope, arg: SelectArg) -> Result<()> {
    if arg.unset {
        return unset(ctx, scope);
    }
    match arg.value {
        Some(value) => set(ctx, scope, value.trim()),
        None => show(ctx, scope),
    }
}

fn show(ctx: &Context, scope: Scope) -> Result<()> {
    let selector = match scope {
        Scope::Shell => ctx.store.shell(&ctx.env),
        Scope::Local => ctx.store.local(&ctx.cwd)?,
        Scope::Global => ctx.store.global()?,
    };
    match selector {
        Some(selector) => println!("{}", selector.value),
        None => match scope {
            Scope::Shell => bail!("{SHELL_VAR} is not set"),
            Scope::Local => bail!("no {LOCAL_FILE} in {} or its parents", ctx.cwd.display()),
            Scope::Global => bail!("no global JDK is set"),
        },
    }
    Ok(())
}

/// Validate `value` against a fresh scan, then persist what it resolved to in a
/// form shims can resolve without running launchers.
fn set(ctx: &Context, scope: Scope, value: &str) -> Result<()> {
    if value.is_empty() {
        bail!("the {scope} selector cannot be empty");
    }
    let installation = match_value(&ctx.scan()?.registry, value, &ctx.cwd)?;
    let dispatch = ctx.dispatch_scan()?.registry;
    let persisted = persisted_value(&dispatch, &installation)?;

    match scope {
        Scope::Shell => println!("{}", shell::export_line(SHELL_VAR, &persisted)),
        Scope::Local => {
            let file = ctx.store.set_local(&ctx.cwd, &persisted)?;
            tracing::info!(file = %file.display(), "local selector written");
        }
        Scope::Global => {
            let file = ctx.store.set_global(&persisted)?;
            tracing::info!(file = %file.display(), "global selector written");
        }
    }
    Ok(())
}

fn unset(ctx: &Context, scope: Scope) -> Result<()> {
    match scope {
        Scope::Shell => println!("{}", shell::unset_line(SHELL_VAR)),
        Scope::Local => {
            if !ctx.store.unset_local(&ctx.cwd)? {
                tracing::warn!("no {LOCAL_FILE} in {}", ctx.cwd.display());
            }
        }
        Scope::Global => {
            if !ctx.store.unset_global()? {
                tracing::warn!("no global JDK was set");
            }
        }
    }
    Ok(())
}

/// The name shims know the installation by, or its absolute home when it lives
/// outside the search paths.
fn persisted_value(dispatch: &Registry, installation: &JdkInstallation) -> Result<String> {
    if let Some(registered) = dispatch.find_by_home(&installation.home) {
        return Ok(registered.name.clone());
    }
    if inspect_home(&installation.home).is_err() {
        bail!(
            "{} can only be identified by running its launcher; \
             add a release file or rename {} to include the version",
            installation.name,
            installation.home.display()
        );
    }
    Ok(installation.home.to_string_lossy().into_owned())
}
