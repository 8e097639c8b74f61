//! Laundry request endpoints

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
use crate::models::{LaundryFilter, LaundryRequest};

/// POST /laundry - student reference is checked softly
async fn create_laundry(
    State(state): State<Arc<AppState>>,
    ValidJson(request): ValidJson<LaundryRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    records::create(&state, request).await
}

/// GET /laundry?student_id=
async fn list_laundry(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<LaundryFilter>,
) -> Result<Json<Vec<Value>>, ApiError> {
    records::list::<LaundryRequest>(&state, filter.to_document()).await
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/laundry", get(list_laundry).post(create_laundry))
}
