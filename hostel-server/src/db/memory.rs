//! In-process document store for `serve --in-memory` and tests
//!
//! Documents live in a map of collection name to insertion-ordered
//! vectors. Filters match on field equality, like the MongoDB queries
//! the handlers issue.

use std::collections::BTreeMap;

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use tokio::sync::RwLock;

use super::store::{DocumentStore, StoreError};

pub struct MemoryStore {
    name: String,
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new("hostel")
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(field, expected)| document.get(field) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<ObjectId, StoreError> {
        let id = ObjectId::new();
        let mut stored = doc! { "_id": id };
        for (field, value) in document {
            stored.insert(field, value);
        }

        self.collections
            .write()
            .await
            .entry(collection.to_owned())
            .or_default()
            .push(stored);

        Ok(id)
    }

    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let found: Vec<Document> = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| matches(d, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(found)
    }

    async fn find_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<Option<Document>, StoreError> {
        let filter = doc! { "_id": Bson::ObjectId(id) };
        Ok(self.find(collection, filter).await?.into_iter().next())
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.collections.read().await.keys().cloned().collect())
    }

    fn database_name(&self) -> &str {
        &self.name
    }
}
