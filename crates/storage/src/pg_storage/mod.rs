//! PostgreSQL storage backend using sqlx.

mod schools;

use std::time::Duration;

use school_locator_core::{
    env_parse_with_default, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS,
    PG_POOL_MAX_CONNECTIONS,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;

pub(crate) const SCHOOL_COLUMNS: &str = "id, name, address, latitude, longitude, created_at";

/// Connection pool tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PgPoolConfig {
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

impl Default for PgPoolConfig {
    fn default() -> Self {
        Self {
            max_connections: PG_POOL_MAX_CONNECTIONS,
            acquire_timeout_secs: PG_POOL_ACQUIRE_TIMEOUT_SECS,
            idle_timeout_secs: PG_POOL_IDLE_TIMEOUT_SECS,
        }
    }
}

impl PgPoolConfig {
    /// Reads `SCHOOL_LOCATOR_PG_*` overrides, falling back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_connections: env_parse_with_default(
                "SCHOOL_LOCATOR_PG_MAX_CONNECTIONS",
                defaults.max_connections,
            ),
            acquire_timeout_secs: env_parse_with_default(
                "SCHOOL_LOCATOR_PG_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout_secs,
            ),
            idle_timeout_secs: env_parse_with_default(
                "SCHOOL_LOCATOR_PG_IDLE_TIMEOUT_SECS",
                defaults.idle_timeout_secs,
            ),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connects, then runs migrations before handing out the store.
    pub async fn new(database_url: &str, config: PgPoolConfig) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!(max_connections = config.max_connections, "PgStorage initialized");
        Ok(Self { pool })
    }

    /// Waits for checked-out connections to return, then closes the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("PgStorage pool closed");
    }
}
