use crate::context::Context;
use anyhow::Result;
use clap::{Parser, Subcommand};
use jenv_state::Scope;

mod exec;
mod rehash;
mod scan;
mod select;
mod status;
mod versions;

#[derive(Debug, Parser)]
#[command(name = "jenv", version, about, long_about = None, propagate_version = true)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "list", name = "versions", about = "List installed JDKs")]
    Versions(versions::VersionsArg),
    #[command(name = "version", about = "Show the active JDK and where it was selected")]
    Version,
    #[command(name = "global", about = "Show, set or unset the user-wide JDK")]
    Global(select::SelectArg),
    #[command(name = "local", about = "Show, set or unset the JDK for this directory")]
    Local(select::SelectArg),
    #[command(
        name = "shell",
        about = "Print the shell command that selects a JDK for this session"
    )]
    Shell(select::SelectArg),
    #[command(name = "which", about = "Show the full path a tool dispatches to")]
    Which(status::WhichArg),
    #[command(name = "rehash", about = "Regenerate shims for every installed tool")]
    Rehash,
    #[command(name = "scan", about = "Scan for JDKs and manage custom search paths")]
    Scan(scan::ScanArg),
    #[command(
        name = "exec",
        hide = true,
        disable_help_flag = true,
        disable_version_flag = true
    )]
    Exec(exec::ExecArg),
}

impl App {
    pub fn run(self) -> Result<i32> {
        let ctx = Context::load()?;
        match self.cmd {
            Commands::Versions(arg) => versions::run(&ctx, arg)?,
            Commands::Version => status::version(&ctx)?,
            Commands::Global(arg) => select::run(&ctx, Scope::Global, arg)?,
            Commands::Local(arg) => select::run(&ctx, Scope::Local, arg)?,
            Commands::Shell(arg) => select::run(&ctx, Scope::Shell, arg)?,
            Commands::Which(arg) => status::which(&ctx, arg)?,
            Commands::Rehash => rehash::run(&ctx)?,
            Commands::Scan(arg) => scan::run(&ctx, arg)?,
            Commands::Exec(arg) => return exec::run(&ctx, arg),
        }
        Ok(0)
    }
}
