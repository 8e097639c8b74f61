//! Student endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use mongodb::bson::Document;
use serde_json::Value;

use super::records::{self, CreatedResponse};
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::Student;

/// POST /students
async fn create_student(
    State(state): State<Arc<AppState>>,
    ValidJson(student): ValidJson<Student>,
) -> Result<Json<CreatedResponse>, ApiError> {
    records::create(&state, student).await
}

/// GET /students
async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    records::list::<Student>(&state, Document::new()).await
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/students", get(list_students).post(create_student))
}
