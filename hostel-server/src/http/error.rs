//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::models::validation::FieldErrorBody;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Payload failed record constraints (422)
    Validation(ValidationError),

    /// Body is not JSON or has the wrong content type (400)
    MalformedBody { message: String },

    /// Referenced record confirmed absent (404)
    ReferenceNotFound { resource: &'static str },

    /// Gateway is disconnected (503)
    StorageUnavailable,

    /// Storage fault (500, logged)
    Storage(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => {
                let fields: Vec<FieldErrorBody> =
                    e.fields().iter().map(FieldErrorBody::from).collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({
                        "error": "validation_error",
                        "message": e.to_string(),
                        "fields": fields,
                    }),
                )
            }
            Self::MalformedBody { message } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "malformed_body",
                    "message": message
                }),
            ),
            Self::ReferenceNotFound { resource } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} not found", resource)
                }),
            ),
            Self::StorageUnavailable => {
                tracing::error!("Request needed the database but it is not connected");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({
                        "error": "storage_unavailable",
                        "message": "database not available"
                    }),
                )
            }
            Self::Storage(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Unavailable => Self::StorageUnavailable,
            _ => Self::Storage(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FieldError, FieldReason};
    use axum::body::to_bytes;

    #[tokio::test]
    async fn validation_error_is_422_with_fields() {
        let err = ApiError::Validation(ValidationError::Fields(vec![FieldError::new(
            "year",
            FieldReason::OutOfRange { min: 1, max: 6 },
        )]));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["fields"][0]["field"], "year");
    }

    #[tokio::test]
    async fn missing_student_is_404() {
        let response = ApiError::ReferenceNotFound { resource: "Student" }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Student not found");
    }

    #[tokio::test]
    async fn unavailable_store_is_server_error() {
        let response = ApiError::from(StoreError::Unavailable).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response =
            ApiError::from(StoreError::UnexpectedId("7".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
