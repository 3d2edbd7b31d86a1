use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::validation::FieldError;

/// Modeled request outcomes. Validation and not-found are expected and map
/// to specific codes; anything out of the store is an unexpected failure
/// answered with 500 and no retry.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("task {0} not found")]
    NotFound(i64),
    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl From<Vec<FieldError>> for ApiError {
    fn from(errors: Vec<FieldError>) -> Self {
        ApiError::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": errors })),
            )
                .into_response(),
            ApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": format!("Task with id {id} not found") })),
            )
                .into_response(),
            ApiError::Database(err) => {
                // Internal detail goes to the log, not the response body.
                tracing::error!(error = %err, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "An internal error occurred" })),
                )
                    .into_response()
            }
        }
    }
}
