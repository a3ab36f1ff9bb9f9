//! # Error Handling Middleware
//!
//! Maps scheduling errors to HTTP status codes and JSON error bodies of the
//! form `{"error": <message>, "type": <kind>}`, so every rejected request
//! carries the distinct reason it was rejected for.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use apptsched_core::errors::SchedulingError;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use apptsched_api::middleware::error_handling::AppError;
/// use apptsched_core::errors::SchedulingError;
///
/// async fn handler(found: bool) -> Result<Json<u32>, AppError> {
///     if !found {
///         return Err(AppError(SchedulingError::NotFound("appointment".to_string())));
///     }
///     Ok(Json(1))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub SchedulingError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            err if err.is_validation() => StatusCode::BAD_REQUEST,
            SchedulingError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.0.to_string();

        if status.is_server_error() {
            tracing::error!(error = ?self.0, "Request failed: {}", message);
        } else {
            tracing::warn!(kind = self.0.kind(), "Request rejected: {}", message);
        }

        let body = Json(json!({
            "error": message,
            "type": self.0.kind(),
        }));

        (status, body).into_response()
    }
}

/// Automatic conversion from SchedulingError to AppError
impl From<SchedulingError> for AppError {
    fn from(err: SchedulingError) -> Self {
        AppError(err)
    }
}
