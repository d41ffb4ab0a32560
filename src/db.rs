//! Database connection pool management.
//!
//! The pool is created once at process start from the `DB_*` configuration
//! values and shared across all request handlers. Connection acquisition,
//! reuse and release are handled by sqlx per query; handlers never manage a
//! connection's lifecycle directly.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Pool, Postgres};

use crate::config::Config;

/// Type alias for PostgreSQL connection pool.
///
/// Instead of writing `Pool<Postgres>` everywhere, we can use `DbPool`.
pub type DbPool = Pool<Postgres>;

/// Build connection options from the discrete `DB_*` configuration fields.
fn connect_options(config: &Config) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .database(&config.db_database)
        .username(&config.db_user)
        .password(&config.db_password)
}

/// Create a new PostgreSQL connection pool.
///
/// A connection pool maintains multiple database connections that can be reused across HTTP requests which is much more efficient than opening a new connection for each request.
///
/// # Errors
///
/// Returns an error if:
/// - Cannot connect to PostgreSQL server
/// - Database authentication fails
pub async fn create_pool(config: &Config) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        // Limit concurrent connections
        .max_connections(5)
        .connect_with(connect_options(config))
        .await
}

/// Create a pool without connecting up front.
///
/// Connections are only established when the first query runs, so this never
/// fails at construction time. Used by integration tests to build a router
/// against a database that may be unreachable.
pub fn create_lazy_pool(config: &Config) -> DbPool {
    PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy_with(connect_options(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_options_wire_up_all_config_fields() {
        let config = Config {
            api_port: 3000,
            db_host: "db.internal".to_string(),
            db_port: 5433,
            db_database: "skyvex".to_string(),
            db_user: "skyvex_ro".to_string(),
            db_password: "secret".to_string(),
        };

        let options = connect_options(&config);
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("skyvex"));
        assert_eq!(options.get_username(), "skyvex_ro");
    }
}
