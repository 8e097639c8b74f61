//! Menu endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use mongodb::bson::Document;
use serde_json::Value;

use super::records::{self, CreatedResponse};
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::Menu;

async fn create_menu(
    State(state): State<Arc<AppState>>,
    ValidJson(menu): ValidJson<Menu>,
) -> Result<Json<CreatedResponse>, ApiError> {
    records::create(&state, menu).await
}

async fn list_menu(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Value>>, ApiError> {
    records::list::<Menu>(&state, Document::new()).await
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/menu", get(list_menu).post(create_menu))
}
