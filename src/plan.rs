//! Built-in bootstrap plan for the crawl stores.

use std::path::Path;

use crate::bootstrap::{self, EnsureOutcome};
use crate::storage::{Document, SqliteStore};
use crate::types::{Direction, IndexDef, QuestionRecord, RepositoryRecord, StoreError};

pub const GITHUB_STORE: &str = "github_crawl";
pub const GITHUB_COLLECTION: &str = "repositories";
pub const STACKOVERFLOW_STORE: &str = "stackoverflow_crawl";
pub const STACKOVERFLOW_COLLECTION: &str = "questions";

/// One (store, collection) bootstrap target.
pub struct PlanEntry {
    pub store: String,
    pub collection: String,
    pub seeds: Vec<Document>,
    pub indexes: Vec<IndexDef>,
}

/// The layout the doc-search crawlers expect.
///
/// Repositories are deduplicated by `full_name`, questions by `question_id`.
/// The question crawler pages through creation-date windows, so the date
/// index is part of the bootstrap rather than something the crawler adds
/// later.
pub fn builtin() -> Vec<PlanEntry> {
    vec![
        PlanEntry {
            store: GITHUB_STORE.to_string(),
            collection: GITHUB_COLLECTION.to_string(),
            seeds: vec![RepositoryRecord::template().document()],
            indexes: vec![IndexDef::single("full_name", Direction::Asc).unique()],
        },
        PlanEntry {
            store: STACKOVERFLOW_STORE.to_string(),
            collection: STACKOVERFLOW_COLLECTION.to_string(),
            seeds: vec![QuestionRecord::template().document()],
            indexes: vec![
                IndexDef::single("question_id", Direction::Asc).unique(),
                IndexDef::single("creation_date", Direction::Asc),
            ],
        },
    ]
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlanReport {
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Run every entry against the stores under `data_dir`. A failing entry is
/// logged and counted; the remaining entries still run, so one unreachable
/// store does not block the other crawl's bootstrap.
pub fn run<P: AsRef<Path>>(data_dir: P, entries: &[PlanEntry]) -> PlanReport {
    let mut report = PlanReport::default();
    for entry in entries {
        match provision(data_dir.as_ref(), entry) {
            Ok(EnsureOutcome::Created { documents, indexes }) => {
                log::info!(
                    "📦 {}.{}: created with {} index(es), {} seed document(s)",
                    entry.store,
                    entry.collection,
                    indexes,
                    documents
                );
                report.created += 1;
            }
            Ok(EnsureOutcome::AlreadyExists) => {
                log::info!(
                    "✅ {}.{}: already present, skipping",
                    entry.store,
                    entry.collection
                );
                report.skipped += 1;
            }
            Err(err) => {
                log::error!("❌ {}.{}: {}", entry.store, entry.collection, err);
                report.failed += 1;
            }
        }
    }
    report
}

fn provision(data_dir: &Path, entry: &PlanEntry) -> Result<EnsureOutcome, StoreError> {
    let store = SqliteStore::open(data_dir, &entry.store)?;
    bootstrap::ensure(&store, &entry.collection, &entry.seeds, &entry.indexes)
}
