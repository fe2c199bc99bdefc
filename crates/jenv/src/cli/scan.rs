use crate::context::Context;
use crate::exit::CliError;
use crate::ui::Formatter;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tabled::Tabled;

#[derive(Debug, Clone, Args)]
pub struct ScanArg {
    /// Add a directory to the custom search paths before scanning
    #[arg(long, value_name = "DIR")]
    add_path: Vec<PathBuf>,
    /// Remove a directory from the custom search paths before scanning
    #[arg(long, value_name = "DIR")]
    remove_path: Vec<PathBuf>,
    /// Print the effective search paths instead of scanning
    #[arg(long, conflicts_with_all = ["add_path", "remove_path"])]
    list_paths: bool,
}

#[derive(Tabled)]
struct Found {
    name: String,
    source: String,
    home: String,
}

pub fn run(ctx: &Context, arg: ScanArg) -> Result<()> {
    if arg.list_paths {
        for search in ctx.search_paths()?.iter() {
            println!("{}\t{}", search.provenance, search.path.display());
        }
        return Ok(());
    }

    let custom = ctx.custom_paths();
    for path in &arg.add_path {
        let path = ctx.absolute(path);
        if custom.add(&path)? {
            println!("added {}", path.display());
        } else {
            eprintln!("{} is already a search path", path.display());
        }
    }
    for path in &arg.remove_path {
        let path = ctx.absolute(path);
        if custom.remove(&path)? {
            println!("removed {}", path.display());
        } else {
            eprintln!("{} is not a custom search path", path.display());
        }
    }

    let report = ctx.scan()?;
    if report.registry.is_empty() {
        if !report.warnings.is_empty() {
            return Err(CliError::ScanFailed(report.warnings.len()).into());
        }
        println!("no JDKs found");
        return Ok(());
    }

    let table = Formatter::default()
        .header(format!("{} JDK(s) found", report.registry.len()))
        .build(report.registry.iter().map(|jdk| Found {
            name: jdk.name.clone(),
            source: jdk.provenance.to_string(),
            home: jdk.home.display().to_string(),
        }));
    println!("{table}");
    Ok(())
}
