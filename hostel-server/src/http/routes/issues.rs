//! Maintenance issue endpoints

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
use crate::models::{Issue, IssueFilter};

/// POST /issues
async fn create_issue(
    State(state): State<Arc<AppState>>,
    ValidJson(issue): ValidJson<Issue>,
) -> Result<Json<CreatedResponse>, ApiError> {
    records::create(&state, issue).await
}

/// GET /issues?student_id=&status=
async fn list_issues(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<IssueFilter>,
) -> Result<Json<Vec<Value>>, ApiError> {
    records::list::<Issue>(&state, filter.to_document()).await
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/issues", get(list_issues).post(create_issue))
}
