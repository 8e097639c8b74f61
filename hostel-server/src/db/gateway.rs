//! Gateway over the configured document store
//!
//! Opened once at startup. When configuration is missing or the client
//! cannot be built, the gateway stays disconnected and every operation
//! reports `StoreError::Unavailable`.

use std::sync::Arc;

use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde::Serialize;
use serde_json::Value;

use super::mongo::MongoStore;
use super::store::{DocumentStore, StoreError};

/// Connection settings taken from the environment
#[derive(Debug, Clone, Default)]
pub struct StoreSettings {
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

impl StoreSettings {
    /// Blank values count as unset.
    pub fn new(database_url: Option<String>, database_name: Option<String>) -> Self {
        Self {
            database_url: database_url.filter(|s| !s.trim().is_empty()),
            database_name: database_name.filter(|s| !s.trim().is_empty()),
        }
    }

    pub fn url_configured(&self) -> bool {
        self.database_url.is_some()
    }

    pub fn name_configured(&self) -> bool {
        self.database_name.is_some()
    }
}

pub struct Gateway {
    store: Option<Arc<dyn DocumentStore>>,
    settings: StoreSettings,
}

impl Gateway {
    /// Open the MongoDB store described by `settings`, falling back to a
    /// disconnected gateway.
    pub async fn connect(settings: StoreSettings) -> Self {
        let (Some(url), Some(name)) = (
            settings.database_url.clone(),
            settings.database_name.clone(),
        ) else {
            tracing::warn!("DATABASE_URL or DATABASE_NAME not set, starting without a database");
            return Self::disconnected(settings);
        };

        match MongoStore::connect(&url, &name).await {
            Ok(store) => {
                tracing::info!(database = %name, "Document store ready");
                Self::with_store(Arc::new(store), settings)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to open document store, starting disconnected");
                Self::disconnected(settings)
            }
        }
    }

    pub fn with_store(store: Arc<dyn DocumentStore>, settings: StoreSettings) -> Self {
        Self {
            store: Some(store),
            settings,
        }
    }

    pub fn disconnected(settings: StoreSettings) -> Self {
        Self {
            store: None,
            settings,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.store.is_some()
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    fn store(&self) -> Result<&dyn DocumentStore, StoreError> {
        self.store.as_deref().ok_or(StoreError::Unavailable)
    }

    /// Serialize `record` into `collection`, returning the new id as hex.
    pub async fn insert<T: Serialize>(
        &self,
        collection: &str,
        record: &T,
    ) -> Result<String, StoreError> {
        let store = self.store()?;
        let document = mongodb::bson::to_document(record)?;
        let id = store.insert_one(collection, document).await?;

        tracing::debug!(collection, id = %id, "Inserted document");
        Ok(id.to_hex())
    }

    /// Documents matching every equality in `filter`; empty returns all.
    pub async fn query(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, StoreError> {
        self.store()?.find(collection, filter).await
    }

    pub async fn find_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<Option<Document>, StoreError> {
        self.store()?.find_by_id(collection, id).await
    }

    pub async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        self.store()?.collection_names().await
    }

    pub fn database_name(&self) -> Option<&str> {
        self.store.as_deref().map(|s| s.database_name())
    }
}

/// Convert a stored document to JSON with `_id` rendered as a hex string.
pub fn render_document(mut document: Document) -> Value {
    if let Ok(id) = document.get_object_id("_id") {
        document.insert("_id", id.to_hex());
    }
    Bson::Document(document).into_relaxed_extjson()
}
