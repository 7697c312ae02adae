//! Idempotent collection bootstrap.

use crate::storage::{Document, Store};
use crate::types::{IndexDef, StoreError};

/// What `ensure` did for one (store, collection) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// The collection was created, indexed and seeded on this invocation.
    Created { documents: usize, indexes: usize },
    /// The collection was already present; nothing was touched.
    AlreadyExists,
}

/// Ensure `collection` exists in `store` exactly once: create it, apply the
/// index definitions in input order, and insert the seed batch. If the
/// collection is already there, returns [`EnsureOutcome::AlreadyExists`]
/// without side effects.
///
/// The existence check and the create/index/seed sequence are not atomic
/// against concurrent bootstrap runs: two racers can both observe a missing
/// collection, and the engine's duplicate-table and unique-index rejections
/// are the only safety net. Callers needing resilience wrap the invocation
/// themselves; no retry happens at this layer.
pub fn ensure<S: Store + ?Sized>(
    store: &S,
    collection: &str,
    seeds: &[Document],
    indexes: &[IndexDef],
) -> Result<EnsureOutcome, StoreError> {
    if collection.is_empty() {
        return Err(StoreError::InvalidName(collection.to_string()));
    }

    let existing = store.collection_names()?;
    if existing.iter().any(|name| name == collection) {
        log::debug!(
            "collection {}.{} already present, skipping",
            store.name(),
            collection
        );
        return Ok(EnsureOutcome::AlreadyExists);
    }

    store.create_collection(collection)?;
    for index in indexes {
        store.create_index(collection, index)?;
    }
    if !seeds.is_empty() {
        store.insert_batch(collection, seeds)?;
    }

    Ok(EnsureOutcome::Created {
        documents: seeds.len(),
        indexes: indexes.len(),
    })
}
