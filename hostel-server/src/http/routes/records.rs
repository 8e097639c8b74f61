//! Create and list helpers shared by every record route

use axum::Json;
use mongodb::bson::Document;
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::db::render_document;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Record;
use crate::reference::check_student;

/// Response to every create endpoint
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Check the soft student reference (if any), then insert.
#[instrument(skip_all, fields(collection = R::COLLECTION))]
pub async fn create<R: Record>(
    state: &AppState,
    record: R,
) -> Result<Json<CreatedResponse>, ApiError> {
    if let Some(student_id) = record.student_ref() {
        check_student(&state.gateway, student_id).await.enforce()?;
    }

    let id = state.gateway.insert(R::COLLECTION, &record).await?;
    Ok(Json(CreatedResponse { id }))
}

/// Every document of `R` matching `filter`, ids rendered as strings.
pub async fn list<R: Record>(
    state: &AppState,
    filter: Document,
) -> Result<Json<Vec<Value>>, ApiError> {
    let documents = state.gateway.query(R::COLLECTION, filter).await?;
    Ok(Json(documents.into_iter().map(render_document).collect()))
}
