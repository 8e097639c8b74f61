//! Attendance endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use super::records::{self, CreatedResponse};
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{AttendanceFilter, AttendanceRecord};

/// POST /attendance
async fn mark_attendance(
    State(state): State<Arc<AppState>>,
    ValidJson(record): ValidJson<AttendanceRecord>,
) -> Result<Json<CreatedResponse>, ApiError> {
    records::create(&state, record).await
}

/// GET /attendance?student_id=
async fn list_attendance(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<AttendanceFilter>,
) -> Result<Json<Vec<Value>>, ApiError> {
    records::list::<AttendanceRecord>(&state, filter.to_document()).await
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/attendance", get(list_attendance).post(mark_attendance))
}
