//! Service listing HTTP handler.

use crate::{db::DbPool, error::AppError, models::service::Service};
use axum::{Json, extract::State};

/// List all services for public display.
///
/// # Endpoint
///
/// `GET /api/services`
///
/// # Response
///
/// - **Success (200 OK)**: JSON array of service records (may be empty)
/// - **Error (500)**: Database unreachable or query failed; the body is a
///   fixed generic message and never contains the underlying error detail
///
/// ```json
/// [
///   {
///     "id": 2,
///     "name": "Cloud Migration",
///     "description": "Move your workloads to the cloud.",
///     "icon": "cloud",
///     "display_order": 1
///   },
///   {
///     "id": 1,
///     "name": "Consulting",
///     "description": "Expert advice.",
///     "icon": null,
///     "display_order": 2
///   }
/// ]
/// ```
///
/// # Ordering
///
/// Services are returned ascending by `display_order`. Ties keep the
/// database's storage order.
///
/// # Side Effects
///
/// Each call issues exactly one read query; there is no caching, so repeated
/// calls repeat the full query.
pub async fn list_services(State(pool): State<DbPool>) -> Result<Json<Vec<Service>>, AppError> {
    let services = sqlx::query_as::<_, Service>(
        r#"
        SELECT id, name, description, icon, display_order
        FROM services
        ORDER BY display_order ASC
        "#,
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(services))
}
