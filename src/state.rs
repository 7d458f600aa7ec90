use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;

/// Shared application state, created once at startup and cloned into every
/// request. Pool clones are cheap (internally reference counted); the config
/// is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}
