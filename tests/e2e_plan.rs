use crawlstore::plan::{self, PlanReport};
use crawlstore::storage::{SqliteStore, Store};
use crawlstore::types::{QuestionRecord, RepositoryRecord};
use serde_json::Value;
use tempfile::TempDir;

#[test]
fn builtin_plan_provisions_both_stores() {
    let dir = TempDir::new().unwrap();
    let entries = plan::builtin();

    let report = plan::run(dir.path(), &entries);
    assert_eq!(
        report,
        PlanReport {
            created: 2,
            skipped: 0,
            failed: 0
        }
    );

    let github = SqliteStore::open(dir.path(), plan::GITHUB_STORE).unwrap();
    assert_eq!(
        github.collection_names().unwrap(),
        vec![plan::GITHUB_COLLECTION]
    );
    let repos = github.fetch_all(plan::GITHUB_COLLECTION).unwrap();
    assert_eq!(repos.len(), 1);
    let seeded: RepositoryRecord =
        serde_json::from_value(Value::Object(repos[0].clone())).unwrap();
    assert_eq!(seeded, RepositoryRecord::template());

    let stackoverflow = SqliteStore::open(dir.path(), plan::STACKOVERFLOW_STORE).unwrap();
    assert_eq!(
        stackoverflow.collection_names().unwrap(),
        vec![plan::STACKOVERFLOW_COLLECTION]
    );
    let questions = stackoverflow.fetch_all(plan::STACKOVERFLOW_COLLECTION).unwrap();
    assert_eq!(questions.len(), 1);
    let seeded: QuestionRecord =
        serde_json::from_value(Value::Object(questions[0].clone())).unwrap();
    assert_eq!(seeded, QuestionRecord::template());

    let repo_indexes = github.list_indexes(plan::GITHUB_COLLECTION).unwrap();
    assert_eq!(repo_indexes.len(), 1);
    assert_eq!(repo_indexes[0].name, "repositories_full_name_1");
    assert!(repo_indexes[0].unique);

    let question_indexes = stackoverflow
        .list_indexes(plan::STACKOVERFLOW_COLLECTION)
        .unwrap();
    assert_eq!(
        question_indexes
            .iter()
            .map(|i| (i.name.as_str(), i.unique))
            .collect::<Vec<_>>(),
        vec![
            ("questions_question_id_1", true),
            ("questions_creation_date_1", false),
        ]
    );
}

#[test]
fn rerunning_the_plan_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let entries = plan::builtin();

    plan::run(dir.path(), &entries);
    let github = SqliteStore::open(dir.path(), plan::GITHUB_STORE).unwrap();
    let before = github.fetch_all(plan::GITHUB_COLLECTION).unwrap();

    let report = plan::run(dir.path(), &entries);
    assert_eq!(
        report,
        PlanReport {
            created: 0,
            skipped: 2,
            failed: 0
        }
    );
    assert_eq!(github.fetch_all(plan::GITHUB_COLLECTION).unwrap(), before);
}

#[test]
fn unreachable_data_dir_fails_both_entries_without_panicking() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does_not_exist");
    let report = plan::run(&missing, &plan::builtin());
    assert_eq!(
        report,
        PlanReport {
            created: 0,
            skipped: 0,
            failed: 2
        }
    );
}

#[test]
fn reset_then_rerun_reseeds_from_scratch() {
    let dir = TempDir::new().unwrap();
    let entries = plan::builtin();
    plan::run(dir.path(), &entries);

    let github = SqliteStore::open(dir.path(), plan::GITHUB_STORE).unwrap();
    github.reset().unwrap();
    assert!(!github.path().exists());

    let report = plan::run(dir.path(), &entries);
    assert_eq!(
        report,
        PlanReport {
            created: 1,
            skipped: 1,
            failed: 0
        }
    );
    assert_eq!(github.count_documents(plan::GITHUB_COLLECTION).unwrap(), 1);
}
