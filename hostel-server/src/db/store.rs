//! Document store abstraction

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document store is not connected")]
    Unavailable,

    #[error("database error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] mongodb::bson::ser::Error),

    #[error("store returned a non-ObjectId identifier: {0}")]
    UnexpectedId(String),
}

/// A document database holding one collection per record kind.
///
/// Implementations must be safe to call from many requests at once.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document and return its generated identifier.
    async fn insert_one(&self, collection: &str, document: Document)
        -> Result<ObjectId, StoreError>;

    /// Documents whose fields equal every entry of `filter`.
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError>;

    async fn find_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<Option<Document>, StoreError>;

    async fn collection_names(&self) -> Result<Vec<String>, StoreError>;

    fn database_name(&self) -> &str;
}
