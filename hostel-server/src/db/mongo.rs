//! MongoDB-backed document store

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use super::store::{DocumentStore, StoreError};

pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Build a client for `database_url` and select `database_name`.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on
    /// the first operation rather than here.
    pub async fn connect(database_url: &str, database_name: &str) -> Result<Self, StoreError> {
        let options = ClientOptions::parse(database_url).await?;
        let client = Client::with_options(options)?;

        Ok(Self {
            database: client.database(database_name),
        })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<ObjectId, StoreError> {
        let result = self.collection(collection).insert_one(document).await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::UnexpectedId(result.inserted_id.to_string()))
    }

    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError> {
        let cursor = self.collection(collection).find(filter).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn find_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<Option<Document>, StoreError> {
        Ok(self.collection(collection).find_one(doc! { "_id": id }).await?)
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.database.list_collection_names().await?)
    }

    fn database_name(&self) -> &str {
        self.database.name()
    }
}
