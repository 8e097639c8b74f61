//! Root and schema endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::Value;

use crate::models::schema;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET /
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hostel Management Backend Running",
    })
}

/// GET /schema
async fn get_schema() -> Json<Value> {
    Json(schema::all())
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/schema", get(get_schema))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_reports_running() {
        let Json(body) = root().await;
        assert_eq!(body.message, "Hostel Management Backend Running");
    }
}
