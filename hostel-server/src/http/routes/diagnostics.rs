//! Database diagnostics endpoint
//!
//! GET /test - always 200, reports whether the store is configured,
//! connected and answering.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::Gateway;
use crate::http::server::AppState;

/// Collection names reported at most
const MAX_COLLECTIONS: usize = 10;

/// Error text is cut to this many characters
const MAX_ERROR_CHARS: usize = 50;

#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: &'static str,
    pub database: String,
    pub database_url: &'static str,
    pub database_name: &'static str,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

fn set_or_not(configured: bool) -> &'static str {
    if configured {
        "✅ Set"
    } else {
        "❌ Not Set"
    }
}

pub async fn diagnose(gateway: &Gateway) -> DiagnosticsResponse {
    let settings = gateway.settings();
    let mut response = DiagnosticsResponse {
        backend: "✅ Running",
        database: "⚠️  Available but not initialized".to_string(),
        database_url: set_or_not(settings.url_configured()),
        database_name: set_or_not(settings.name_configured()),
        connection_status: "Not Connected",
        collections: Vec::new(),
    };

    if !gateway.is_connected() {
        return response;
    }

    response.connection_status = "Connected";
    match gateway.collection_names().await {
        Ok(mut names) => {
            names.truncate(MAX_COLLECTIONS);
            response.collections = names;
            response.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            let message: String = e.to_string().chars().take(MAX_ERROR_CHARS).collect();
            tracing::warn!(error = %e, "Listing collections failed");
            response.database = format!("⚠️  Connected but Error: {}", message);
        }
    }

    response
}

/// GET /test
async fn test_database(State(state): State<Arc<AppState>>) -> Json<DiagnosticsResponse> {
    Json(diagnose(&state.gateway).await)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/test", get(test_database))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DocumentStore, MemoryStore, StoreSettings};
    use mongodb::bson::doc;

    #[tokio::test]
    async fn disconnected_gateway_reports_not_connected() {
        let gateway = Gateway::disconnected(StoreSettings::default());
        let report = diagnose(&gateway).await;

        assert_eq!(report.backend, "✅ Running");
        assert_eq!(report.connection_status, "Not Connected");
        assert_eq!(report.database_url, "❌ Not Set");
        assert!(report.database.contains("not initialized"));
        assert!(report.collections.is_empty());
    }

    #[tokio::test]
    async fn caps_collection_list() {
        let store = MemoryStore::default();
        for i in 0..12 {
            store
                .insert_one(&format!("c{:02}", i), doc! { "n": i })
                .await
                .unwrap();
        }
        let settings = StoreSettings::new(Some("mongodb://db".into()), Some("hostel".into()));
        let gateway = Gateway::with_store(Arc::new(store), settings);

        let report = diagnose(&gateway).await;
        assert_eq!(report.connection_status, "Connected");
        assert_eq!(report.database, "✅ Connected & Working");
        assert_eq!(report.database_name, "✅ Set");
        assert_eq!(report.collections.len(), MAX_COLLECTIONS);
    }
}
