use crate::context::Context;
use crate::ui::Formatter;
use anyhow::Result;
use clap::Args;
use jenv_discovery::JdkInstallation;
use tabled::Tabled;

#[derive(Debug, Clone, Args)]
pub struct VersionsArg {
    /// Also show each home and how it was found
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "")]
    active: &'static str,
    name: String,
    version: String,
    vendor: String,
}

#[derive(Tabled)]
struct VerboseRow {
    #[tabled(inline)]
    row: Row,
    source: String,
    home: String,
}

impl Row {
    fn new(jdk: &JdkInstallation, active: bool) -> Self {
        Self {
            active: if active { "*" } else { "" },
            name: jdk.name.clone(),
            version: jdk.version.to_string(),
            vendor: jdk.vendor.display_name().to_string(),
        }
    }
}

pub fn run(ctx: &Context, arg: VersionsArg) -> Result<()> {
    let registry = ctx.scan()?.registry;
    if registry.is_empty() {
        eprintln!("no JDKs found; add a directory with `jenv scan --add-path <DIR>`");
        return Ok(());
    }

    let active = match ctx.resolver(&registry).resolve(&ctx.cwd, &ctx.env) {
        Ok(resolution) => Some(resolution),
        Err(e) => {
            tracing::debug!("no active JDK: {e}");
            None
        }
    };
    let is_active = |jdk: &JdkInstallation| {
        active
            .as_ref()
            .is_some_and(|r| r.installation.home == jdk.home)
    };
    let formatter = Formatter::default().footer(
        active
            .as_ref()
            .map(|r| format!("* {} ({})", r.installation.name, r.origin)),
    );

    let table = if arg.verbose {
        formatter.build(registry.iter().map(|jdk| VerboseRow {
            row: Row::new(jdk, is_active(jdk)),
            source: jdk.provenance.to_string(),
            home: jdk.home.display().to_string(),
        }))
    } else {
        formatter.build(registry.iter().map(|jdk| Row::new(jdk, is_active(jdk))))
    };
    println!("{table}");
    Ok(())
}
