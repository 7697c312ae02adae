use std::fs;

use anyhow::Result;

use crate::context::Context;
use crate::plan;
use crate::storage::SqliteStore;

pub fn init_data_dir(ctx: &Context) -> Result<()> {
    fs::create_dir_all(&ctx.config.data_dir)?;
    Ok(())
}

/// Delete the database files of every store the built-in plan targets.
pub fn reset_stores(ctx: &Context) -> Result<()> {
    for entry in plan::builtin() {
        let store = SqliteStore::open(&ctx.config.data_dir, &entry.store)?;
        store.reset()?;
        log::info!("🗑 Reset store {}", entry.store);
    }
    Ok(())
}
