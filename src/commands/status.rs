use anyhow::{Context as AnyhowContext, Result};

use crate::context::Context;
use crate::plan;
use crate::storage::{SqliteStore, Store};

pub fn run(ctx: &Context) -> Result<()> {
    let mut stores: Vec<String> = plan::builtin().into_iter().map(|e| e.store).collect();
    stores.sort();
    stores.dedup();

    for name in stores {
        let store = SqliteStore::open(&ctx.config.data_dir, &name)
            .with_context(|| format!("opening store {name}"))?;
        if !store.path().exists() {
            println!("{name}: not provisioned");
            continue;
        }
        for collection in store.collection_names()? {
            let count = store.count_documents(&collection)?;
            let indexes = store
                .list_indexes(&collection)?
                .into_iter()
                .map(|index| {
                    if index.unique {
                        format!("{} (unique)", index.name)
                    } else {
                        index.name
                    }
                })
                .collect::<Vec<_>>();
            println!(
                "{name}.{collection}: {count} document(s), indexes: [{}]",
                indexes.join(", ")
            );
        }
    }
    Ok(())
}
