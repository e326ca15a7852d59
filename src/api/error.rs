//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::NotekeepError;

pub const NOT_FOUND_MESSAGE: &str = "Note not found.";

#[derive(Debug)]
pub enum ApiError {
    /// No note with the requested id.
    NotFound,
    /// Anything else; `message` goes to the client, `source` only to the log.
    Internal {
        message: &'static str,
        source: NotekeepError,
    },
}

impl ApiError {
    pub fn internal(message: &'static str) -> impl FnOnce(NotekeepError) -> Self {
        move |source| ApiError::Internal { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": NOT_FOUND_MESSAGE })),
            )
                .into_response(),
            ApiError::Internal { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": message })),
                )
                    .into_response()
            }
        }
    }
}
