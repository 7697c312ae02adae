use crate::types::{IndexDef, StoreError};

/// A structured record as it lives in a collection. No schema is enforced
/// beyond whatever unique indexes the collection carries.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// One index as reported by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexInfo {
    pub name: String,
    pub unique: bool,
}

/// Handle on one logical store. Implementations are passed to the bootstrap
/// routine explicitly; nothing reaches into process-wide connection state.
pub trait Store {
    fn name(&self) -> &str;

    /// Names of the collections currently present, sorted.
    fn collection_names(&self) -> Result<Vec<String>, StoreError>;

    fn create_collection(&self, collection: &str) -> Result<(), StoreError>;

    fn create_index(&self, collection: &str, index: &IndexDef) -> Result<(), StoreError>;

    /// Insert all documents in one transaction. Either the whole batch lands
    /// or none of it does.
    fn insert_batch(&self, collection: &str, documents: &[Document]) -> Result<(), StoreError>;

    fn count_documents(&self, collection: &str) -> Result<u64, StoreError>;

    /// All documents in insertion order.
    fn fetch_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// Indexes of `collection` in creation order.
    fn list_indexes(&self, collection: &str) -> Result<Vec<IndexInfo>, StoreError>;
}
