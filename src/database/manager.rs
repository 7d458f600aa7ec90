use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors surfaced by the persistence layer. Repositories return these;
/// handlers convert them to `ApiError` exactly once.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Build the single bounded connection pool for the clinic database.
///
/// The pool is created lazily: the server starts even when the database is
/// down and the health endpoint reports the degraded state instead.
pub fn connect_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connection_timeout))
        .connect_lazy(&config.url)
        .map_err(|_| DatabaseError::InvalidDatabaseUrl)?;

    info!(
        "database pool configured (max_connections={})",
        config.max_connections
    );
    Ok(pool)
}

/// Pings the pool to ensure connectivity.
pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> DatabaseConfig {
        DatabaseConfig {
            url: "postgres://root@localhost:5432/clinica_veterinaria".to_string(),
            max_connections: 2,
            connection_timeout: 1,
        }
    }

    #[tokio::test]
    async fn lazy_pool_builds_without_a_live_server() {
        assert!(connect_pool(&test_config()).is_ok());
    }

    #[test]
    fn garbage_url_is_rejected() {
        let mut db = test_config();
        db.url = "not a url at all".to_string();
        assert!(matches!(
            connect_pool(&db),
            Err(DatabaseError::InvalidDatabaseUrl)
        ));
    }
}
