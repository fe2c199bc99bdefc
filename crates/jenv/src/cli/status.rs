use crate::context::Context;
use anyhow::Result;
use clap::Args;
use jenv_shim::{Dispatcher, JdkResolver};

pub fn version(ctx: &Context) -> Result<()> {
    let registry = ctx.dispatch_scan()?.registry;
    let resolution = ctx.resolver(&registry).resolve(&ctx.cwd, &ctx.env)?;
    println!("{} ({})", resolution.installation.name, resolution.origin);
    Ok(())
}

#[derive(Debug, Clone, Args)]
pub struct WhichArg {
    /// Tool name, e.g. `javac`
    tool: String,
}

pub fn which(ctx: &Context, arg: WhichArg) -> Result<()> {
    let registry = ctx.dispatch_scan()?.registry;
    let resolver = JdkResolver::new(ctx.resolver(&registry), &ctx.cwd, &ctx.env);
    let launch = Dispatcher::new(resolver).prepare(&arg.tool, Vec::new(), &ctx.env)?;
    println!("{}", launch.program.display());
    Ok(())
}
