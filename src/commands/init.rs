use anyhow::Result;

use crate::context::Context;
use crate::plan;

pub fn run(ctx: &Context) -> Result<()> {
    let entries = plan::builtin();
    let report = plan::run(&ctx.config.data_dir, &entries);
    log::info!(
        "🏁 Bootstrap finished: {} created, {} skipped, {} failed",
        report.created,
        report.skipped,
        report.failed
    );
    if report.failed > 0 {
        anyhow::bail!("{} bootstrap target(s) failed", report.failed);
    }
    Ok(())
}
