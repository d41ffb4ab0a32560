//! HTTP router construction.
//!
//! Building the router in a free function (rather than inline in `main`)
//! lets integration tests drive the full middleware stack without binding a
//! socket.

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{db::DbPool, handlers};

/// Build the application router.
///
/// # Routes
///
/// - `GET /api` - fixed confirmation payload
/// - `GET /api/services` - ordered service listing
///
/// # Middleware
///
/// - Permissive CORS: cross-origin requests are allowed from any origin
/// - Request tracing for observability
///
/// The database pool is shared with all handlers via State extraction.
pub fn app(pool: DbPool) -> Router {
    Router::new()
        .route("/api", get(handlers::api::welcome))
        .route("/api/services", get(handlers::services::list_services))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
