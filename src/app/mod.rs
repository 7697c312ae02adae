mod wiring;

use anyhow::{Context as AnyhowContext, Result};
use std::path::Path;

use crate::{cli, commands, context};

pub struct App {
    pub ctx: context::Context,
}

impl App {
    pub fn from_cli() -> Result<(Self, cli::Cli)> {
        let cli = cli::parse();
        let ctx = context::Context::from_cli(&cli);

        crate::tracing::init();
        crate::tracing::set_log_file(ctx.config.log_file.as_deref().map(Path::new));

        log::info!("🚀 Starting crawlstore");
        log::info!("📂 Data dir: {}", ctx.config.data_dir);
        if let Some(path) = ctx.config.log_file.as_deref() {
            log::info!("📝 Log file: {}", path);
        }

        wiring::init_data_dir(&ctx).context("initializing data dir")?;
        if ctx.config.reset {
            wiring::reset_stores(&ctx).context("resetting stores")?;
        }

        Ok((Self { ctx }, cli))
    }
}

pub fn run() -> Result<()> {
    let (app, cli) = App::from_cli()?;

    match &cli.cmd {
        Some(cmd) => cmd.run(&app.ctx),
        None => commands::init::run(&app.ctx),
    }
}
