//! Root confirmation endpoint.

use axum::Json;
use serde::Serialize;

/// Response body for the root endpoint.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    /// Fixed confirmation message
    pub message: String,
}

/// Confirm the API is running.
///
/// # Endpoint
///
/// `GET /api`
///
/// Always returns 200 with a fixed payload, regardless of query parameters
/// or request body. No inputs, no failure modes.
///
/// ```json
/// {
///   "message": "Welcome to the Skyvex API!"
/// }
/// ```
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Skyvex API!".to_string(),
    })
}
