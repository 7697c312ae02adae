use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{params, Connection, ErrorCode};

use crate::types::{IndexDef, StoreError};

use super::traits::{Document, IndexInfo, Store};

/// SQLite-backed document store. One store maps to one database file under
/// the data dir; the file is created lazily on first connection, matching
/// the lazy-creation semantics of the document engines the crawl tooling
/// targets.
#[derive(Clone)]
pub struct SqliteStore {
    name: String,
    path: PathBuf,
}

fn quote_ident(name: &str) -> Result<String, StoreError> {
    if name.is_empty() || name.contains('"') || name.contains('\0') {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(format!("\"{name}\""))
}

fn json_path(field: &str) -> Result<String, StoreError> {
    if field.is_empty() || field.contains('\'') || field.contains('"') {
        return Err(StoreError::InvalidName(field.to_string()));
    }
    Ok(format!("'$.{field}'"))
}

/// Unique-index rejections get their own error kind; everything else stays
/// an engine error.
fn classify_insert_error(err: rusqlite::Error, collection: &str) -> StoreError {
    match &err {
        rusqlite::Error::SqliteFailure(info, message)
            if info.code == ErrorCode::ConstraintViolation
                && info.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            StoreError::DuplicateKey {
                collection: collection.to_string(),
                message: message.clone().unwrap_or_else(|| info.to_string()),
            }
        }
        _ => StoreError::Engine(err),
    }
}

fn db_collection_names(conn: &Connection) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )?;
    let names = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(names)
}

fn db_list_indexes(conn: &Connection, collection: &str) -> rusqlite::Result<Vec<IndexInfo>> {
    let mut stmt = conn.prepare(
        "SELECT name, sql FROM sqlite_master
         WHERE type = 'index' AND tbl_name = ?1 AND sql IS NOT NULL
         ORDER BY rowid",
    )?;
    let indexes = stmt
        .query_map(params![collection], |row| {
            let name: String = row.get(0)?;
            let sql: String = row.get(1)?;
            Ok(IndexInfo {
                name,
                unique: sql.starts_with("CREATE UNIQUE"),
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(indexes)
}

impl SqliteStore {
    /// Handle on the store named `name` under `data_dir`. No connection is
    /// made yet; the database file appears on first use.
    pub fn open<P: AsRef<Path>>(data_dir: P, name: &str) -> Result<Self, StoreError> {
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            path: data_dir.as_ref().join(format!("{name}.db")),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the backing database file to force a clean start.
    pub fn reset(&self) -> std::io::Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        std::fs::remove_file(&self.path)
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.path).map_err(StoreError::Connection)?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(StoreError::Connection)?;
        conn.pragma_update(None, "synchronous", "NORMAL")
            .map_err(StoreError::Connection)?;
        conn.busy_timeout(Duration::from_millis(500))
            .map_err(StoreError::Connection)?;
        Ok(conn)
    }

    fn with_conn<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> Result<T, StoreError>,
    {
        let conn = self.connect()?;
        f(&conn)
    }
}

impl Store for SqliteStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        self.with_conn(|conn| Ok(db_collection_names(conn)?))
    }

    fn create_collection(&self, collection: &str) -> Result<(), StoreError> {
        let table = quote_ident(collection)?;
        self.with_conn(|conn| {
            // Plain CREATE TABLE: the caller already checked for existence,
            // and a concurrent creator must surface as an error rather than
            // silently merge.
            conn.execute(
                &format!(
                    "CREATE TABLE {table} (id INTEGER PRIMARY KEY AUTOINCREMENT, doc TEXT NOT NULL)"
                ),
                [],
            )?;
            Ok(())
        })
    }

    fn create_index(&self, collection: &str, index: &IndexDef) -> Result<(), StoreError> {
        let table = quote_ident(collection)?;
        // Index names share one namespace per database file.
        let index_name = quote_ident(&format!("{}_{}", collection, index.name()))?;
        let columns = index
            .fields
            .iter()
            .map(|(field, direction)| {
                Ok(format!(
                    "json_extract(doc, {}) {}",
                    json_path(field)?,
                    direction.sql()
                ))
            })
            .collect::<Result<Vec<_>, StoreError>>()?
            .join(", ");
        let uniqueness = if index.unique { "UNIQUE " } else { "" };
        self.with_conn(|conn| {
            conn.execute(
                &format!("CREATE {uniqueness}INDEX {index_name} ON {table} ({columns})"),
                [],
            )?;
            Ok(())
        })
    }

    fn insert_batch(&self, collection: &str, documents: &[Document]) -> Result<(), StoreError> {
        let table = quote_ident(collection)?;
        self.with_conn(|conn| {
            let tx = conn.unchecked_transaction()?;
            {
                let mut stmt = tx.prepare(&format!("INSERT INTO {table} (doc) VALUES (?1)"))?;
                for document in documents {
                    let body = serde_json::to_string(document)?;
                    stmt.execute(params![body])
                        .map_err(|err| classify_insert_error(err, collection))?;
                }
            }
            tx.commit()?;
            Ok(())
        })
    }

    fn count_documents(&self, collection: &str) -> Result<u64, StoreError> {
        let table = quote_ident(collection)?;
        self.with_conn(|conn| {
            let count: i64 =
                conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })?;
            Ok(count as u64)
        })
    }

    fn fetch_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let table = quote_ident(collection)?;
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("SELECT doc FROM {table} ORDER BY id"))?;
            let bodies = stmt
                .query_map([], |row| row.get::<_, String>(0))?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            bodies
                .iter()
                .map(|body| Ok(serde_json::from_str::<Document>(body)?))
                .collect()
        })
    }

    fn list_indexes(&self, collection: &str) -> Result<Vec<IndexInfo>, StoreError> {
        self.with_conn(|conn| Ok(db_list_indexes(conn, collection)?))
    }
}
