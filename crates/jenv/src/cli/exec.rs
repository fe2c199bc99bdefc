use crate::context::Context;
use anyhow::Result;
use clap::Args;
use jenv_shim::{Dispatcher, JdkResolver};
use std::ffi::OsString;

/// Entry point of every generated shim.
#[derive(Debug, Clone, Args)]
pub struct ExecArg {
    pub tool: String,
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

/// Resolve, then replace this process with the tool. Nothing runs if resolution or
/// validation fails.
pub fn run(ctx: &Context, arg: ExecArg) -> Result<i32> {
    let registry = ctx.dispatch_scan()?.registry;
    let resolver = JdkResolver::new(ctx.resolver(&registry), &ctx.cwd, &ctx.env);
    let launch = Dispatcher::new(resolver).prepare(&arg.tool, arg.args, &ctx.env)?;
    Ok(launch.exec()?)
}
