//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// The only failure the application handles itself is a data-access failure;
/// malformed requests are rejected by Axum's extractors before reaching
/// handler code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// Database errors are logged with full detail server-side but reported to
/// the caller as an opaque 500 with a fixed message, so storage internals are
/// never leaked in a response body:
///
/// ```json
/// {
///   "error": "An internal server error occurred."
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref err) => {
                // Full detail goes to the operational log only
                tracing::error!("Database error: {err}");

                let body = Json(json!({
                    "error": "An internal server error occurred."
                }));

                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
