use crate::context::Context;
use anyhow::Result;
use jenv_platform::env::PathModifier;
use jenv_shim::ShimGenerator;

pub fn run(ctx: &Context) -> Result<()> {
    let registry = ctx.scan()?.registry;
    let generator = ShimGenerator::new(ctx.home.shims_dir(), ctx.launcher()?);
    let report = generator.rehash_registry(&registry)?;

    if report.is_noop() {
        println!("{} shims up to date", report.unchanged.len());
    } else {
        println!(
            "{} created, {} updated, {} removed, {} unchanged",
            report.created.len(),
            report.updated.len(),
            report.removed.len(),
            report.unchanged.len()
        );
    }

    if !PathModifier::new(ctx.env.path()).contains(generator.dir()) {
        eprintln!(
            "note: add {} to PATH to use the shims",
            generator.dir().display()
        );
    }
    Ok(())
}
