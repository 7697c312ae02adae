use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unreachable: {0}")]
    Connection(#[source] rusqlite::Error),
    #[error("duplicate key in {collection}: {message}")]
    DuplicateKey { collection: String, message: String },
    #[error("invalid identifier: {0:?}")]
    InvalidName(String),
    #[error("document serialization: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("engine error: {0}")]
    Engine(#[from] rusqlite::Error),
}
