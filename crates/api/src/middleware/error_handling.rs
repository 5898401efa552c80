//! # Error Handling Middleware
//!
//! Maps [`SlotError`] onto HTTP status codes and a JSON body of the form
//! `{"error": "<message>"}`, so every endpoint fails the same way.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;
use adslot_core::errors::SlotError;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use adslot_api::middleware::error_handling::AppError;
/// use adslot_core::errors::SlotError;
///
/// async fn handler(id: String) -> Result<Json<String>, AppError> {
///     if id.is_empty() {
///         return Err(AppError(SlotError::Validation("id is required".to_string())));
///     }
///     Ok(Json(id))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub SlotError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            SlotError::NotFound(_) => StatusCode::NOT_FOUND,
            SlotError::Validation(_) => StatusCode::BAD_REQUEST,
            SlotError::InvalidTransition { .. } => StatusCode::CONFLICT,
            SlotError::Conflict(_) => StatusCode::CONFLICT,
            SlotError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SlotError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {:?}", self.0);
        }

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<SlotError> for AppError {
    fn from(err: SlotError) -> Self {
        AppError(err)
    }
}

/// Wraps the report in `SlotError::Database`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(SlotError::Database(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(SlotError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError(SlotError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError(SlotError::Validation(rejection.body_text()))
    }
}

/// Maps a SlotError to an HTTP response
pub fn map_error(err: SlotError) -> Response {
    AppError(err).into_response()
}
